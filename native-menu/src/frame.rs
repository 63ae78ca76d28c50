//! What to draw for one frame of the open menu.
//!
//! The controller turns the current submenu into a [`MenuFrame`]; hosts only
//! have to lay it out. Paging is decided here: the visible window is the page
//! of `num_visible_options` rows that contains the cursor.

use crate::option::{MenuOption, OptionKind};
use crate::submenu::Submenu;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    None,
    Toggle(bool),
    Choice {
        label: String,
        index: usize,
        count: usize,
    },
    /// Row opens another page.
    Link,
    Break,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub text: String,
    pub value: RowValue,
    pub selected: bool,
}

impl FrameRow {
    fn from_option(option: &MenuOption, selected: bool) -> Self {
        let value = match option.kind() {
            OptionKind::Regular { .. } => RowValue::None,
            OptionKind::Bool { value, .. } => RowValue::Toggle(value.get()),
            OptionKind::Vector {
                choices, selected, ..
            } => RowValue::Choice {
                label: choices.get(*selected).cloned().unwrap_or_default(),
                index: *selected,
                count: choices.len(),
            },
            OptionKind::Submenu { .. } => RowValue::Link,
            OptionKind::PageBreak => RowValue::Break,
        };
        Self {
            text: option.text().to_string(),
            value,
            selected,
        }
    }

    /// Right-hand column text, e.g. `On`, `< Rain >`, `>`.
    pub fn value_text(&self) -> String {
        match &self.value {
            RowValue::None | RowValue::Break => String::new(),
            RowValue::Toggle(true) => "On".to_string(),
            RowValue::Toggle(false) => "Off".to_string(),
            RowValue::Choice { label, .. } => format!("< {} >", label),
            RowValue::Link => ">".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFrame {
    pub header: String,
    pub sub_header: String,
    pub rows: Vec<FrameRow>,
    pub footer: String,
    /// 1-based page of the cursor and the number of pages.
    pub page: (usize, usize),
    /// 1-based position of the cursor among selectable options, and their count.
    pub position: (usize, usize),
}

impl MenuFrame {
    pub fn build(submenu: &Submenu, selection: usize) -> Self {
        let options = submenu.options();
        let per_page = submenu.num_visible_options().max(1);
        let total_pages = options.len().div_ceil(per_page).max(1);
        let page = (selection / per_page).min(total_pages - 1);
        let start = page * per_page;
        let end = (start + per_page).min(options.len());

        let rows = options[start.min(end)..end]
            .iter()
            .enumerate()
            .map(|(offset, option)| FrameRow::from_option(option, start + offset == selection))
            .collect();

        let selectable = options.iter().filter(|o| o.is_selectable()).count();
        let position = options
            .iter()
            .take(selection + 1)
            .filter(|o| o.is_selectable())
            .count();

        Self {
            header: submenu.header().to_string(),
            sub_header: submenu.sub_header().to_string(),
            rows,
            footer: options
                .get(selection)
                .map(|o| o.footer().to_string())
                .unwrap_or_default(),
            page: (page + 1, total_pages),
            position: (position, selectable),
        }
    }

    pub fn selected_row(&self) -> Option<&FrameRow> {
        self.rows.iter().find(|row| row.selected)
    }

    /// Counter shown under the options, e.g. `3 of 12`.
    pub fn position_text(&self) -> String {
        format!("{} of {}", self.position.0, self.position.1)
    }
}
