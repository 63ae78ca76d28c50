//! Per-frame menu driver.
//!
//! [`MenuController`] owns the [`MenuRegistry`] and the open/closed state and
//! is ticked once per host frame. Each tick it polls the host for input,
//! applies at most one action (back, select, up/down, left/right), then hands
//! the host a [`MenuFrame`] to draw.
//!
//! ```text
//! Closed --open--> Open(root or last page)
//! Open(a) --select submenu option--> Open(b)   (a pushed on the back-stack)
//! Open(b) --back--> Open(a)                    (cursor on a restored)
//! Open(root) --back / open--> Closed
//! ```

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::frame::MenuFrame;
use crate::host::{MenuControl, MenuHost, MenuSound, PromptKind};
use crate::option::Activation;
use crate::registry::MenuRegistry;
use crate::submenu::{Submenu, SubmenuId};

/// What a frame did, for hosts that want to react outside option callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Opened,
    Closed,
    /// A regular or vector option was pressed.
    Activated { submenu: SubmenuId, index: usize },
    Toggled {
        submenu: SubmenuId,
        index: usize,
        value: bool,
    },
    ChoiceChanged {
        submenu: SubmenuId,
        index: usize,
        choice: usize,
    },
    Entered(SubmenuId),
    Returned(SubmenuId),
}

pub struct MenuController {
    registry: MenuRegistry,
    config: MenuConfig,
    is_open: bool,
    prompts_registered: bool,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

impl MenuController {
    pub fn new(config: MenuConfig) -> Self {
        Self::with_registry(MenuRegistry::new(), config)
    }

    pub fn with_registry(registry: MenuRegistry, config: MenuConfig) -> Self {
        Self {
            registry,
            config,
            is_open: false,
            prompts_registered: false,
        }
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut MenuRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// [`MenuRegistry::add_submenu`] with the configured window size.
    pub fn add_submenu<F>(&mut self, header: &str, sub_header: &str, id: SubmenuId, build: F)
    where
        F: Fn(&mut Submenu) + 'static,
    {
        let visible = self.config.default_visible_options;
        self.registry
            .add_submenu(header, sub_header, id, visible, build);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Create the Select and Back prompts. Only the first call does anything.
    pub fn register_prompts(&mut self, host: &mut dyn MenuHost) {
        if self.prompts_registered {
            return;
        }
        for prompt in [PromptKind::Select, PromptKind::Back] {
            host.register_prompt(prompt, prompt.label());
            host.set_prompt_visible(prompt, self.is_open);
        }
        self.prompts_registered = true;
    }

    /// Open or close the menu. Opening for the first time lands on the root
    /// submenu; later openings resume where the menu was closed.
    pub fn set_enabled(&mut self, host: &mut dyn MenuHost, enabled: bool, play_sounds: bool) {
        if enabled == self.is_open {
            return;
        }
        self.register_prompts(host);
        self.is_open = enabled;

        if enabled {
            if self.registry.current_submenu().is_none() {
                self.restart_at_root();
            }
            self.normalize_selection();
            tracing::info!(submenu = ?self.registry.current_submenu_id(), "Menu opened");
        } else {
            tracing::info!("Menu closed");
        }

        for prompt in [PromptKind::Select, PromptKind::Back] {
            host.set_prompt_visible(prompt, enabled);
        }
        if play_sounds {
            let sound = if enabled {
                MenuSound::Open
            } else {
                MenuSound::Close
            };
            self.play(host, sound);
        }
    }

    /// Run one frame: poll input, apply it, draw.
    pub fn update(&mut self, host: &mut dyn MenuHost) -> Option<MenuEvent> {
        let mut event = None;
        if host.is_control_pressed(MenuControl::Open) {
            let open = !self.is_open;
            self.set_enabled(host, open, true);
            if !open {
                return Some(MenuEvent::Closed);
            }
            event = Some(MenuEvent::Opened);
        }

        if !self.is_open {
            return None;
        }

        host.disable_game_controls();
        if self.registry.current_submenu().is_none() {
            self.restart_at_root();
        }
        // The current page may have been replaced or rebuilt since last frame.
        self.normalize_selection();

        if event.is_none() {
            event = self.handle_input(host);
        }

        if self.is_open {
            self.draw(host);
        }
        event
    }

    fn handle_input(&mut self, host: &mut dyn MenuHost) -> Option<MenuEvent> {
        if host.is_control_pressed(MenuControl::Back) || host.is_prompt_completed(PromptKind::Back)
        {
            return self.go_back(host);
        }
        if host.is_control_pressed(MenuControl::Select)
            || host.is_prompt_completed(PromptKind::Select)
        {
            return self.select(host);
        }
        if host.is_control_pressed(MenuControl::Up) {
            self.move_selection(host, -1);
            return None;
        }
        if host.is_control_pressed(MenuControl::Down) {
            self.move_selection(host, 1);
            return None;
        }
        if host.is_control_pressed(MenuControl::Left) {
            return self.cycle_choice(host, -1);
        }
        if host.is_control_pressed(MenuControl::Right) {
            return self.cycle_choice(host, 1);
        }
        None
    }

    fn select(&mut self, host: &mut dyn MenuHost) -> Option<MenuEvent> {
        let submenu = self.registry.current_submenu_id()?;
        let index = self.registry.selection_index();
        let activation = self.registry.get_selected_option_mut()?.activate();

        let event = match activation {
            Activation::Ran | Activation::Choice(_) => MenuEvent::Activated { submenu, index },
            Activation::Toggled(value) => MenuEvent::Toggled {
                submenu,
                index,
                value,
            },
            Activation::Enter(target) => match self.registry.push_submenu(target) {
                Ok(()) => {
                    self.normalize_selection();
                    MenuEvent::Entered(target)
                }
                Err(e) => {
                    tracing::warn!(from = %submenu, "Can't open submenu: {}", e);
                    return None;
                }
            },
            Activation::Inert => return None,
        };
        self.play(host, MenuSound::Select);
        Some(event)
    }

    fn go_back(&mut self, host: &mut dyn MenuHost) -> Option<MenuEvent> {
        match self.registry.pop_submenu() {
            Ok(previous) => {
                self.normalize_selection();
                self.play(host, MenuSound::Back);
                Some(MenuEvent::Returned(previous))
            }
            Err(MenuError::EmptyBackStack) => {
                self.set_enabled(host, false, true);
                Some(MenuEvent::Closed)
            }
            Err(e) => {
                tracing::warn!("Back navigation failed, returning to root: {}", e);
                self.restart_at_root();
                None
            }
        }
    }

    fn move_selection(&mut self, host: &mut dyn MenuHost, step: isize) {
        let wrap = self.config.wrap_selection;
        let selection = self.registry.selection_index();
        let next = self
            .registry
            .current_submenu()
            .and_then(|sub| sub.next_selectable(selection, step, wrap));
        if let Some(next) = next {
            self.registry.set_selection_index(next);
            self.play(host, MenuSound::Navigate);
        }
    }

    fn cycle_choice(&mut self, host: &mut dyn MenuHost, step: isize) -> Option<MenuEvent> {
        let submenu = self.registry.current_submenu_id()?;
        let index = self.registry.selection_index();
        let choice = self.registry.get_selected_option_mut()?.cycle_choice(step)?;
        self.play(host, MenuSound::Navigate);
        Some(MenuEvent::ChoiceChanged {
            submenu,
            index,
            choice,
        })
    }

    fn draw(&self, host: &mut dyn MenuHost) {
        match self.registry.current_submenu() {
            Some(submenu) => {
                let frame = MenuFrame::build(submenu, self.registry.selection_index());
                host.draw(&frame);
            }
            None => tracing::debug!("Nothing to draw: no current submenu"),
        }
    }

    /// Drop all navigation history and start over on the root page. Used
    /// when the page we were on (or would return to) has been removed.
    fn restart_at_root(&mut self) {
        self.registry.reset_navigation();
        let root = self.config.root_submenu;
        if !self.registry.does_submenu_exist(root) {
            tracing::warn!(submenu = %root, "Root submenu doesn't exist");
            return;
        }
        self.registry.go_to_submenu(root, true);
        self.normalize_selection();
    }

    /// Keep the cursor off page breaks and inside the page.
    fn normalize_selection(&mut self) {
        let selection = self.registry.selection_index();
        let target = match self.registry.current_submenu() {
            Some(sub) if !sub.is_selectable(selection) => sub
                .next_selectable(selection, 1, true)
                .or_else(|| sub.first_selectable())
                .unwrap_or(0),
            _ => return,
        };
        self.registry.set_selection_index(target);
    }

    fn play(&self, host: &mut dyn MenuHost, sound: MenuSound) {
        if self.config.play_sounds {
            host.play_sound(sound);
        }
    }
}
