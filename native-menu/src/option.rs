//! Selectable rows inside a submenu

use crate::submenu::SubmenuId;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Callback run when a regular option is pressed.
pub type Action = Box<dyn FnMut()>;
/// Callback run after a bool option flips; receives the new value.
pub type ToggleAction = Box<dyn FnMut(bool)>;
/// Callback run when a vector option changes or is pressed; receives the
/// choice index and its label.
pub type ChoiceAction = Box<dyn FnMut(usize, &str)>;

/// The five kinds of row a submenu can hold.
pub enum OptionKind {
    Regular {
        action: Option<Action>,
    },
    /// On/off toggle over a boolean the caller keeps a handle to.
    Bool {
        value: Rc<Cell<bool>>,
        action: Option<ToggleAction>,
    },
    /// Left/right arrows over an ordered list of labels.
    Vector {
        choices: Vec<String>,
        selected: usize,
        action: Option<ChoiceAction>,
    },
    /// Opens another submenu.
    Submenu {
        target: SubmenuId,
    },
    /// Blank or caption-only row used to organise a page. Never selectable.
    PageBreak,
}

impl fmt::Debug for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Regular { action } => f
                .debug_struct("Regular")
                .field("has_action", &action.is_some())
                .finish(),
            OptionKind::Bool { value, action } => f
                .debug_struct("Bool")
                .field("value", &value.get())
                .field("has_action", &action.is_some())
                .finish(),
            OptionKind::Vector {
                choices,
                selected,
                action,
            } => f
                .debug_struct("Vector")
                .field("choices", choices)
                .field("selected", selected)
                .field("has_action", &action.is_some())
                .finish(),
            OptionKind::Submenu { target } => {
                f.debug_struct("Submenu").field("target", target).finish()
            }
            OptionKind::PageBreak => f.write_str("PageBreak"),
        }
    }
}

/// What pressing an option did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Ran,
    Toggled(bool),
    Choice(usize),
    Enter(SubmenuId),
    Inert,
}

/// One row of a submenu.
#[derive(Debug)]
pub struct MenuOption {
    text: String,
    footer: String,
    pub(crate) index: usize,
    kind: OptionKind,
}

impl MenuOption {
    pub(crate) fn new(
        text: impl Into<String>,
        footer: impl Into<String>,
        index: usize,
        kind: OptionKind,
    ) -> Self {
        Self {
            text: text.into(),
            footer: footer.into(),
            index,
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    /// Position within the owning submenu.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut OptionKind {
        &mut self.kind
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self.kind, OptionKind::PageBreak)
    }

    pub fn is_selectable(&self) -> bool {
        !self.is_page_break()
    }

    pub fn submenu_target(&self) -> Option<SubmenuId> {
        match self.kind {
            OptionKind::Submenu { target } => Some(target),
            _ => None,
        }
    }

    pub fn bool_value(&self) -> Option<bool> {
        match &self.kind {
            OptionKind::Bool { value, .. } => Some(value.get()),
            _ => None,
        }
    }

    pub fn choices(&self) -> Option<&[String]> {
        match &self.kind {
            OptionKind::Vector { choices, .. } => Some(choices),
            _ => None,
        }
    }

    pub fn choice_index(&self) -> Option<usize> {
        match &self.kind {
            OptionKind::Vector { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// Label of the current vector choice.
    pub fn current_choice(&self) -> Option<&str> {
        match &self.kind {
            OptionKind::Vector {
                choices, selected, ..
            } => choices.get(*selected).map(String::as_str),
            _ => None,
        }
    }

    /// Jump a vector option straight to `choice` without running its callback.
    pub fn set_choice(&mut self, choice: usize) -> bool {
        match &mut self.kind {
            OptionKind::Vector {
                choices, selected, ..
            } if choice < choices.len() => {
                *selected = choice;
                true
            }
            _ => false,
        }
    }

    /// Step a vector option by `step` choices, wrapping at both ends, and run
    /// its callback. Returns the new choice index, or `None` for any other
    /// kind or an empty choice list.
    pub fn cycle_choice(&mut self, step: isize) -> Option<usize> {
        let OptionKind::Vector {
            choices,
            selected,
            action,
        } = &mut self.kind
        else {
            return None;
        };
        if choices.is_empty() {
            return None;
        }

        let len = choices.len() as isize;
        *selected = (*selected as isize + step).rem_euclid(len) as usize;
        if let Some(action) = action {
            action(*selected, &choices[*selected]);
        }
        Some(*selected)
    }

    /// Press the option.
    pub fn activate(&mut self) -> Activation {
        match &mut self.kind {
            OptionKind::Regular { action } => {
                if let Some(action) = action {
                    action();
                }
                Activation::Ran
            }
            OptionKind::Bool { value, action } => {
                let toggled = !value.get();
                value.set(toggled);
                if let Some(action) = action {
                    action(toggled);
                }
                Activation::Toggled(toggled)
            }
            OptionKind::Vector {
                choices,
                selected,
                action,
            } => match choices.get(*selected) {
                Some(label) => {
                    if let Some(action) = action {
                        action(*selected, label);
                    }
                    Activation::Choice(*selected)
                }
                None => Activation::Inert,
            },
            OptionKind::Submenu { target } => Activation::Enter(*target),
            OptionKind::PageBreak => Activation::Inert,
        }
    }
}
