//! Submenu pages and the builder methods that fill them

use crate::option::{Action, ChoiceAction, MenuOption, OptionKind, ToggleAction};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Rows shown at once when a caller doesn't say otherwise.
pub const DEFAULT_VISIBLE_OPTIONS: usize = 8;

/// Identity of a submenu. Ordering matters: [`crate::MenuRegistry::go_to_submenu`]
/// treats a move to a higher id as going deeper.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubmenuId(pub i32);

impl fmt::Display for SubmenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SubmenuId {
    fn from(id: i32) -> Self {
        SubmenuId(id)
    }
}

pub(crate) type Builder = Rc<dyn Fn(&mut Submenu)>;

/// A page of options.
pub struct Submenu {
    id: SubmenuId,
    header: String,
    sub_header: String,
    num_visible_options: usize,
    options: Vec<MenuOption>,
    builder: Option<Builder>,
}

impl fmt::Debug for Submenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submenu")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sub_header", &self.sub_header)
            .field("num_visible_options", &self.num_visible_options)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Submenu {
    /// An empty submenu. A window size of zero is raised to one.
    pub fn new(
        header: impl Into<String>,
        sub_header: impl Into<String>,
        id: SubmenuId,
        num_visible_options: usize,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            sub_header: sub_header.into(),
            num_visible_options: num_visible_options.max(1),
            options: Vec::new(),
            builder: None,
        }
    }

    /// Create the submenu and run `builder` on it. The builder is kept so the
    /// page can be rebuilt later.
    pub(crate) fn built_with(
        header: impl Into<String>,
        sub_header: impl Into<String>,
        id: SubmenuId,
        num_visible_options: usize,
        builder: Builder,
    ) -> Self {
        let mut submenu = Self::new(header, sub_header, id, num_visible_options);
        builder(&mut submenu);
        submenu.builder = Some(builder);
        submenu
    }

    pub fn id(&self) -> SubmenuId {
        self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn sub_header(&self) -> &str {
        &self.sub_header
    }

    pub fn set_sub_header(&mut self, sub_header: impl Into<String>) {
        self.sub_header = sub_header.into();
    }

    pub fn num_visible_options(&self) -> usize {
        self.num_visible_options
    }

    pub fn num_options(&self) -> usize {
        self.options.len()
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    fn push(&mut self, text: &str, footer: &str, kind: OptionKind) -> &mut Self {
        let index = self.options.len();
        self.options.push(MenuOption::new(text, footer, index, kind));
        self
    }

    /// Plain option with nothing bound to it.
    pub fn add_regular_option(&mut self, text: &str, footer: &str) -> &mut Self {
        self.push(text, footer, OptionKind::Regular { action: None })
    }

    /// Plain option; `action` runs when it is pressed.
    pub fn add_regular_option_with<F>(&mut self, text: &str, footer: &str, action: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        let action: Action = Box::new(action);
        self.push(
            text,
            footer,
            OptionKind::Regular {
                action: Some(action),
            },
        )
    }

    /// On/off toggle over `value`, which the caller keeps a clone of.
    pub fn add_bool_option(
        &mut self,
        text: &str,
        footer: &str,
        value: &Rc<Cell<bool>>,
    ) -> &mut Self {
        self.push(
            text,
            footer,
            OptionKind::Bool {
                value: Rc::clone(value),
                action: None,
            },
        )
    }

    /// On/off toggle; `action` receives the new value after each flip.
    pub fn add_bool_option_with<F>(
        &mut self,
        text: &str,
        footer: &str,
        value: &Rc<Cell<bool>>,
        action: F,
    ) -> &mut Self
    where
        F: FnMut(bool) + 'static,
    {
        let action: ToggleAction = Box::new(action);
        self.push(
            text,
            footer,
            OptionKind::Bool {
                value: Rc::clone(value),
                action: Some(action),
            },
        )
    }

    /// Left/right choice list. Accepts owned strings or string slices.
    pub fn add_vector_option<I, S>(&mut self, text: &str, footer: &str, choices: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(
            text,
            footer,
            OptionKind::Vector {
                choices: choices.into_iter().map(Into::into).collect(),
                selected: 0,
                action: None,
            },
        )
    }

    /// Left/right choice list; `action` runs on every change and on press.
    pub fn add_vector_option_with<I, S, F>(
        &mut self,
        text: &str,
        footer: &str,
        choices: I,
        action: F,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnMut(usize, &str) + 'static,
    {
        let action: ChoiceAction = Box::new(action);
        self.push(
            text,
            footer,
            OptionKind::Vector {
                choices: choices.into_iter().map(Into::into).collect(),
                selected: 0,
                action: Some(action),
            },
        )
    }

    /// Choice list labelled `"{start_text}{i}{end_text}"` for `i` in `0..count`.
    pub fn add_numbered_vector_option(
        &mut self,
        text: &str,
        footer: &str,
        count: usize,
        start_text: &str,
        end_text: &str,
    ) -> &mut Self {
        self.add_vector_option(text, footer, numbered_labels(count, start_text, end_text))
    }

    pub fn add_numbered_vector_option_with<F>(
        &mut self,
        text: &str,
        footer: &str,
        count: usize,
        start_text: &str,
        end_text: &str,
        action: F,
    ) -> &mut Self
    where
        F: FnMut(usize, &str) + 'static,
    {
        self.add_vector_option_with(
            text,
            footer,
            numbered_labels(count, start_text, end_text),
            action,
        )
    }

    /// Option that opens submenu `id`.
    pub fn add_submenu_option(&mut self, text: &str, footer: &str, id: SubmenuId) -> &mut Self {
        self.push(text, footer, OptionKind::Submenu { target: id })
    }

    /// Blank (or caption-only) spacer row.
    pub fn add_page_break(&mut self, text: &str) -> &mut Self {
        self.push(text, "", OptionKind::PageBreak)
    }

    pub fn get_option(&self, index: usize) -> Option<&MenuOption> {
        let option = self.options.get(index);
        if option.is_none() {
            tracing::debug!(
                submenu = %self.id,
                index,
                len = self.options.len(),
                "Bad option index"
            );
        }
        option
    }

    pub fn get_option_mut(&mut self, index: usize) -> Option<&mut MenuOption> {
        if index >= self.options.len() {
            tracing::debug!(
                submenu = %self.id,
                index,
                len = self.options.len(),
                "Bad option index"
            );
        }
        self.options.get_mut(index)
    }

    /// Remove the option at `index`. Later options shift down one slot and are
    /// renumbered so indices stay `0..n`.
    pub fn delete_option(&mut self, index: usize) -> bool {
        let Some(pos) = self.options.iter().position(|o| o.index == index) else {
            return false;
        };
        self.options.remove(pos);
        for (i, option) in self.options.iter_mut().enumerate().skip(pos) {
            option.index = i;
        }
        true
    }

    /// Drop every option and release the backing storage.
    pub fn clear(&mut self) {
        self.options.clear();
        self.options.shrink_to_fit();
    }

    /// Clear the page and run its builder again. Returns `false` for a
    /// submenu that was never given a builder.
    pub fn rebuild(&mut self) -> bool {
        let Some(builder) = self.builder.clone() else {
            return false;
        };
        self.clear();
        builder(self);
        true
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(MenuOption::is_selectable)
    }

    /// First selectable index at or after the top of the page.
    pub fn first_selectable(&self) -> Option<usize> {
        self.options.iter().position(MenuOption::is_selectable)
    }

    /// Walk from `from` in steps of `step` (+1 down, -1 up) to the next
    /// selectable option, skipping page breaks. With `wrap` the walk continues
    /// past either end; without it, `None` is returned at the edge.
    pub fn next_selectable(&self, from: usize, step: isize, wrap: bool) -> Option<usize> {
        let len = self.options.len() as isize;
        if len == 0 || step == 0 {
            return None;
        }

        let mut pos = from as isize;
        for _ in 0..len {
            pos += step;
            if !(0..len).contains(&pos) {
                if !wrap {
                    return None;
                }
                pos = pos.rem_euclid(len);
            }
            if self.is_selectable(pos as usize) {
                return Some(pos as usize);
            }
        }
        None
    }
}

fn numbered_labels(count: usize, start_text: &str, end_text: &str) -> Vec<String> {
    (0..count)
        .map(|i| format!("{start_text}{i}{end_text}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Submenu {
        Submenu::new("Player", "Options", SubmenuId(1), DEFAULT_VISIBLE_OPTIONS)
    }

    #[test]
    fn options_get_sequential_indices() {
        let toggle = Rc::new(Cell::new(false));
        let mut sub = page();
        sub.add_regular_option("One", "")
            .add_regular_option("Two", "")
            .add_regular_option("Three", "")
            .add_bool_option("Invincible", "", &toggle);

        assert_eq!(sub.num_options(), 4);
        let option = sub.get_option(3).expect("bool option");
        assert_eq!(option.index(), 3);
        assert_eq!(option.bool_value(), Some(false));
    }

    #[test]
    fn numbered_vector_labels() {
        let mut sub = page();
        sub.add_numbered_vector_option("Level", "", 3, "Lvl ", "");
        let choices = sub.get_option(0).and_then(|o| o.choices()).unwrap();
        assert_eq!(choices, ["Lvl 0", "Lvl 1", "Lvl 2"]);
    }

    #[test]
    fn vector_accepts_str_slices_and_strings() {
        let mut sub = page();
        sub.add_vector_option("A", "", ["x", "y"]);
        sub.add_vector_option("B", "", vec!["x".to_string(), "y".to_string()]);
        assert_eq!(sub.get_option(0).unwrap().choices(), sub.get_option(1).unwrap().choices());
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let mut sub = page();
        sub.add_regular_option("Only", "");
        assert!(sub.get_option(1).is_none());
        assert!(sub.get_option_mut(7).is_none());
    }

    #[test]
    fn clear_empties_page() {
        let mut sub = page();
        sub.add_regular_option("a", "").add_page_break("").add_regular_option("b", "");
        sub.clear();
        assert_eq!(sub.num_options(), 0);
        assert!(sub.get_option(0).is_none());
    }

    #[test]
    fn delete_renumbers_following_options() {
        let mut sub = page();
        sub.add_regular_option("a", "")
            .add_regular_option("b", "")
            .add_regular_option("c", "");

        assert!(sub.delete_option(0));
        assert_eq!(sub.num_options(), 2);
        assert_eq!(sub.get_option(0).unwrap().text(), "b");
        assert_eq!(sub.get_option(0).unwrap().index(), 0);
        assert_eq!(sub.get_option(1).unwrap().index(), 1);
        assert!(!sub.delete_option(2));
    }

    #[test]
    fn next_selectable_skips_page_breaks_and_wraps() {
        let mut sub = page();
        sub.add_regular_option("a", "")
            .add_page_break("-- misc --")
            .add_regular_option("b", "")
            .add_page_break("");

        assert_eq!(sub.next_selectable(0, 1, true), Some(2));
        assert_eq!(sub.next_selectable(2, 1, true), Some(0));
        assert_eq!(sub.next_selectable(0, -1, true), Some(2));
        assert_eq!(sub.next_selectable(2, 1, false), None);
    }

    #[test]
    fn next_selectable_on_page_breaks_only() {
        let mut sub = page();
        sub.add_page_break("").add_page_break("");
        assert_eq!(sub.next_selectable(0, 1, true), None);
        assert_eq!(sub.first_selectable(), None);
    }

    #[test]
    fn rebuild_reruns_builder() {
        let counter = Rc::new(Cell::new(0));
        let counter_in_builder = Rc::clone(&counter);
        let builder: Builder = Rc::new(move |sub: &mut Submenu| {
            counter_in_builder.set(counter_in_builder.get() + 1);
            sub.add_regular_option(&format!("Build {}", counter_in_builder.get()), "");
        });
        let mut sub = Submenu::built_with("Dyn", "", SubmenuId(9), 4, builder);
        assert_eq!(sub.get_option(0).unwrap().text(), "Build 1");

        assert!(sub.rebuild());
        assert_eq!(sub.num_options(), 1);
        assert_eq!(sub.get_option(0).unwrap().text(), "Build 2");
    }

    #[test]
    fn rebuild_without_builder_is_refused() {
        let mut sub = page();
        sub.add_regular_option("kept", "");
        assert!(!sub.rebuild());
        assert_eq!(sub.num_options(), 1);
    }

    #[test]
    fn zero_window_is_raised_to_one() {
        let sub = Submenu::new("h", "s", SubmenuId(0), 0);
        assert_eq!(sub.num_visible_options(), 1);
    }
}
