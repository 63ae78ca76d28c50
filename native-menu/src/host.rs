//! Capabilities the menu needs from the running game.
//!
//! The controller never talks to the game directly. Anything that polls
//! input, shows button prompts, draws, or plays a sound goes through
//! [`MenuHost`], implemented once per host runtime (and by
//! [`crate::mock::MockMenuHost`] in tests).

use crate::frame::MenuFrame;

/// Logical inputs the menu reacts to. Hosts map these onto their own
/// bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuControl {
    Open,
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}

/// On-screen button hints registered while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Select,
    Back,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Select => "Select",
            PromptKind::Back => "Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSound {
    Open,
    Close,
    Navigate,
    Select,
    Back,
}

/// Host runtime interface consumed by [`crate::MenuController`].
pub trait MenuHost {
    /// Whether `control` was pressed this frame.
    fn is_control_pressed(&self, control: MenuControl) -> bool;

    /// Create the prompt once; it starts hidden.
    fn register_prompt(&mut self, prompt: PromptKind, label: &str);

    fn set_prompt_visible(&mut self, prompt: PromptKind, visible: bool);

    /// Whether the player completed (held/pressed through) the prompt this frame.
    fn is_prompt_completed(&self, prompt: PromptKind) -> bool;

    /// Draw the menu for this frame.
    fn draw(&mut self, frame: &MenuFrame);

    fn play_sound(&mut self, _sound: MenuSound) {}

    /// Keep game actions bound to the same inputs from firing while the menu
    /// is open. Called every frame the menu is open.
    fn disable_game_controls(&mut self) {}
}
