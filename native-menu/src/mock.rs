//! Recording host for driving the controller without a game

use crate::controller::{MenuController, MenuEvent};
use crate::frame::MenuFrame;
use crate::host::{MenuControl, MenuHost, MenuSound, PromptKind};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    RegisterPrompt { prompt: PromptKind, label: String },
    SetPromptVisible { prompt: PromptKind, visible: bool },
    Draw,
    PlaySound(MenuSound),
    DisableGameControls,
}

/// Mock host - inputs are queued per frame, everything the controller asks
/// for is recorded.
#[derive(Debug, Default)]
pub struct MockMenuHost {
    pressed: HashSet<MenuControl>,
    completed: HashSet<PromptKind>,
    prompts: HashMap<PromptKind, bool>,
    frames: Vec<MenuFrame>,
    call_log: Vec<MockCall>,
}

impl MockMenuHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `control` down until [`Self::release_all`].
    pub fn press(&mut self, control: MenuControl) {
        self.pressed.insert(control);
    }

    /// Report `prompt` as completed until [`Self::release_all`].
    pub fn complete_prompt(&mut self, prompt: PromptKind) {
        self.completed.insert(prompt);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.completed.clear();
    }

    /// Run one frame with `controls` pressed.
    pub fn tick(
        &mut self,
        menu: &mut MenuController,
        controls: &[MenuControl],
    ) -> Option<MenuEvent> {
        for control in controls {
            self.press(*control);
        }
        let event = menu.update(self);
        self.release_all();
        event
    }

    pub fn last_frame(&self) -> Option<&MenuFrame> {
        self.frames.last()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames.len()
    }

    /// `None` if the prompt was never registered.
    pub fn is_prompt_visible(&self, prompt: PromptKind) -> Option<bool> {
        self.prompts.get(&prompt).copied()
    }

    pub fn sounds(&self) -> Vec<MenuSound> {
        self.call_log
            .iter()
            .filter_map(|call| match call {
                MockCall::PlaySound(sound) => Some(*sound),
                _ => None,
            })
            .collect()
    }

    /// Get recorded calls for verification
    pub fn get_calls(&self) -> &[MockCall] {
        &self.call_log
    }

    /// Clear call history
    pub fn clear_calls(&mut self) {
        self.call_log.clear();
    }
}

impl MenuHost for MockMenuHost {
    fn is_control_pressed(&self, control: MenuControl) -> bool {
        self.pressed.contains(&control)
    }

    fn register_prompt(&mut self, prompt: PromptKind, label: &str) {
        self.call_log.push(MockCall::RegisterPrompt {
            prompt,
            label: label.to_string(),
        });
        self.prompts.insert(prompt, false);
    }

    fn set_prompt_visible(&mut self, prompt: PromptKind, visible: bool) {
        self.call_log
            .push(MockCall::SetPromptVisible { prompt, visible });
        if let Some(shown) = self.prompts.get_mut(&prompt) {
            *shown = visible;
        }
    }

    fn is_prompt_completed(&self, prompt: PromptKind) -> bool {
        self.completed.contains(&prompt)
    }

    fn draw(&mut self, frame: &MenuFrame) {
        self.call_log.push(MockCall::Draw);
        self.frames.push(frame.clone());
    }

    fn play_sound(&mut self, sound: MenuSound) {
        self.call_log.push(MockCall::PlaySound(sound));
    }

    fn disable_game_controls(&mut self) {
        self.call_log.push(MockCall::DisableGameControls);
    }
}
