//! In-game menu overlay core
//!
//! Owns submenus keyed by integer id, the option lists inside them, and the
//! navigation state (current page, cursor, back-stack, remembered cursor per
//! page). Everything that touches the running game (input, prompts, drawing,
//! sounds) goes through the [`MenuHost`] trait, so the whole state machine can
//! be driven from tests with `mock::MockMenuHost` (behind the `mock` feature).
//!
//! # Example
//!
//! ```
//! use native_menu::{MenuRegistry, SubmenuId};
//!
//! let mut menu = MenuRegistry::new();
//! menu.add_submenu("Main", "Home", SubmenuId(0), 8, |sub| {
//!     sub.add_regular_option("Heal", "Restore health");
//!     sub.add_submenu_option("Weather", "Change the weather", SubmenuId(1));
//! });
//! menu.go_to_submenu(SubmenuId(0), false);
//! assert_eq!(menu.get_selected_option().map(|o| o.text()), Some("Heal"));
//! ```

pub mod config;
pub mod controller;
mod error;
pub mod frame;
pub mod host;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod option;
pub mod registry;
pub mod submenu;

pub use config::MenuConfig;
pub use controller::{MenuController, MenuEvent};
pub use error::{MenuError, MenuResult};
pub use frame::{FrameRow, MenuFrame, RowValue};
pub use host::{MenuControl, MenuHost, MenuSound, PromptKind};
pub use option::{MenuOption, OptionKind};
pub use registry::MenuRegistry;
pub use submenu::{Submenu, SubmenuId, DEFAULT_VISIBLE_OPTIONS};
