//! Terminal implementation of the menu host.
//!
//! Key presses are collected between frames and reported as pressed for one
//! frame. Drawing only records the frame; the render loop paints it with
//! [`crate::widget::MenuWidget`] after the controller has run.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use native_menu::{MenuControl, MenuFrame, MenuHost, MenuSound, PromptKind};
use std::collections::{HashMap, HashSet};

/// Map a terminal key onto a menu control.
pub fn control_for_key(code: KeyCode) -> Option<MenuControl> {
    match code {
        KeyCode::F(4) | KeyCode::Char('m') => Some(MenuControl::Open),
        KeyCode::Up | KeyCode::Char('k') => Some(MenuControl::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuControl::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(MenuControl::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(MenuControl::Right),
        KeyCode::Enter => Some(MenuControl::Select),
        KeyCode::Backspace | KeyCode::Esc => Some(MenuControl::Back),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct TerminalHost {
    pressed: HashSet<MenuControl>,
    prompts: HashMap<PromptKind, bool>,
    frame: Option<MenuFrame>,
    last_sound: Option<MenuSound>,
    game_controls_disabled: bool,
    /// Keys that didn't map to a menu control this frame.
    unmapped: Vec<KeyCode>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal key event. Repeats and releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match control_for_key(key.code) {
            Some(control) => {
                self.pressed.insert(control);
            }
            None => self.unmapped.push(key.code),
        }
    }

    /// Clear the per-frame state before collecting the next frame's input.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.unmapped.clear();
        self.frame = None;
        self.game_controls_disabled = false;
    }

    pub fn frame(&self) -> Option<&MenuFrame> {
        self.frame.as_ref()
    }

    pub fn visible_prompts(&self) -> Vec<PromptKind> {
        [PromptKind::Select, PromptKind::Back]
            .into_iter()
            .filter(|p| self.prompts.get(p).copied().unwrap_or(false))
            .collect()
    }

    pub fn last_sound(&self) -> Option<MenuSound> {
        self.last_sound
    }

    /// Keys the game itself may react to. Empty while the menu holds input.
    pub fn game_keys(&self) -> &[KeyCode] {
        if self.game_controls_disabled {
            &[]
        } else {
            &self.unmapped
        }
    }
}

impl MenuHost for TerminalHost {
    fn is_control_pressed(&self, control: MenuControl) -> bool {
        self.pressed.contains(&control)
    }

    fn register_prompt(&mut self, prompt: PromptKind, label: &str) {
        tracing::debug!(?prompt, label, "Registered prompt");
        self.prompts.insert(prompt, false);
    }

    fn set_prompt_visible(&mut self, prompt: PromptKind, visible: bool) {
        if let Some(shown) = self.prompts.get_mut(&prompt) {
            *shown = visible;
        }
    }

    // Enter and Backspace already arrive as controls; there is no hold-to-confirm.
    fn is_prompt_completed(&self, _prompt: PromptKind) -> bool {
        false
    }

    fn draw(&mut self, frame: &MenuFrame) {
        self.frame = Some(frame.clone());
    }

    fn play_sound(&mut self, sound: MenuSound) {
        tracing::debug!(?sound, "Play sound");
        self.last_sound = Some(sound);
    }

    fn disable_game_controls(&mut self) {
        self.game_controls_disabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(control_for_key(KeyCode::F(4)), Some(MenuControl::Open));
        assert_eq!(control_for_key(KeyCode::Enter), Some(MenuControl::Select));
        assert_eq!(control_for_key(KeyCode::Esc), Some(MenuControl::Back));
        assert_eq!(control_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_press_lasts_one_frame() {
        let mut host = TerminalHost::new();
        host.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        host.handle_key(key(KeyCode::Up, KeyEventKind::Release));
        assert!(host.is_control_pressed(MenuControl::Down));
        assert!(!host.is_control_pressed(MenuControl::Up));

        host.begin_frame();
        assert!(!host.is_control_pressed(MenuControl::Down));
    }

    #[test]
    fn test_game_keys_blocked_while_menu_open() {
        let mut host = TerminalHost::new();
        host.handle_key(key(KeyCode::Char('g'), KeyEventKind::Press));
        assert_eq!(host.game_keys(), [KeyCode::Char('g')]);

        host.disable_game_controls();
        assert!(host.game_keys().is_empty());
    }

    #[test]
    fn test_prompt_visibility() {
        let mut host = TerminalHost::new();
        host.set_prompt_visible(PromptKind::Select, true);
        assert!(host.visible_prompts().is_empty());

        host.register_prompt(PromptKind::Select, "Select");
        host.register_prompt(PromptKind::Back, "Back");
        host.set_prompt_visible(PromptKind::Back, true);
        assert_eq!(host.visible_prompts(), vec![PromptKind::Back]);
    }
}
