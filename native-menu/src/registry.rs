//! Submenu registry and navigation state
//!
//! The registry owns every submenu and remembers where the player is: the
//! current page, the cursor within it, the pages they came through, and the
//! cursor they left on each of those pages.

use crate::error::{MenuError, MenuResult};
use crate::option::MenuOption;
use crate::submenu::{Builder, Submenu, SubmenuId};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct MenuRegistry {
    submenus: BTreeMap<SubmenuId, Submenu>,
    current: Option<SubmenuId>,
    selection_index: usize,
    /// Pages we came through, most recent last.
    prev_submenu_ids: Vec<SubmenuId>,
    /// Cursor position each page was left at.
    last_selections: HashMap<SubmenuId, usize>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create submenu `id` and fill it by calling `build` once. An existing
    /// submenu with the same id is replaced; if it is the current page the
    /// cursor is clamped to the new options.
    pub fn add_submenu<F>(
        &mut self,
        header: &str,
        sub_header: &str,
        id: SubmenuId,
        num_visible_options: usize,
        build: F,
    ) where
        F: Fn(&mut Submenu) + 'static,
    {
        let builder: Builder = Rc::new(build);
        let submenu = Submenu::built_with(header, sub_header, id, num_visible_options, builder);
        let len = submenu.num_options();
        if self.submenus.insert(id, submenu).is_some() {
            tracing::debug!(submenu = %id, "Replaced existing submenu");
        }
        if self.current == Some(id) {
            self.selection_index = self.selection_index.min(len.saturating_sub(1));
        }
    }

    /// Move to submenu `id`, inferring direction from id order: a higher id is
    /// a step forward (the current page is pushed and its cursor remembered),
    /// a lower id is a step back (the back-stack is popped and the page being
    /// left forgets its cursor). Equal ids leave the back-stack alone.
    ///
    /// With `remember_selection` the cursor is restored from the target's
    /// remembered position, otherwise it starts at 0. Unknown ids are ignored.
    pub fn go_to_submenu(&mut self, id: SubmenuId, remember_selection: bool) {
        if !self.submenus.contains_key(&id) {
            tracing::debug!(submenu = %id, "go_to_submenu: submenu doesn't exist");
            return;
        }

        let Some(current) = self.current else {
            self.current = Some(id);
            return;
        };

        if id > current {
            self.prev_submenu_ids.push(current);
            self.last_selections.insert(current, self.selection_index);
        } else if id < current {
            self.prev_submenu_ids.pop();
            self.last_selections.remove(&current);
        }

        self.enter(id, remember_selection);
    }

    /// Open submenu `id` on top of the current one, regardless of id order.
    pub fn push_submenu(&mut self, id: SubmenuId) -> MenuResult<()> {
        if !self.submenus.contains_key(&id) {
            return Err(MenuError::UnknownSubmenu(id));
        }
        let current = self.current.ok_or(MenuError::NoCurrentSubmenu)?;

        self.prev_submenu_ids.push(current);
        self.last_selections.insert(current, self.selection_index);
        self.enter(id, false);
        Ok(())
    }

    /// Return to the page below the current one on the back-stack, restoring
    /// the cursor it was left at. Returns the id now current.
    pub fn pop_submenu(&mut self) -> MenuResult<SubmenuId> {
        let current = self.current.ok_or(MenuError::NoCurrentSubmenu)?;
        let previous = *self
            .prev_submenu_ids
            .last()
            .ok_or(MenuError::EmptyBackStack)?;
        if !self.submenus.contains_key(&previous) {
            return Err(MenuError::UnknownSubmenu(previous));
        }

        self.prev_submenu_ids.pop();
        self.last_selections.remove(&current);
        self.enter(previous, true);
        Ok(previous)
    }

    fn enter(&mut self, id: SubmenuId, remember_selection: bool) {
        self.current = Some(id);
        self.selection_index = if remember_selection {
            self.last_selections.get(&id).copied().unwrap_or(0)
        } else {
            0
        };
    }

    pub fn get_submenu(&self, id: SubmenuId) -> Option<&Submenu> {
        let submenu = self.submenus.get(&id);
        if submenu.is_none() {
            tracing::debug!(submenu = %id, "get_submenu: invalid id");
        }
        submenu
    }

    pub fn get_submenu_mut(&mut self, id: SubmenuId) -> Option<&mut Submenu> {
        let submenu = self.submenus.get_mut(&id);
        if submenu.is_none() {
            tracing::debug!(submenu = %id, "get_submenu_mut: invalid id");
        }
        submenu
    }

    pub fn does_submenu_exist(&self, id: SubmenuId) -> bool {
        self.submenus.contains_key(&id)
    }

    pub fn submenu_ids(&self) -> impl Iterator<Item = SubmenuId> + '_ {
        self.submenus.keys().copied()
    }

    pub fn current_submenu_id(&self) -> Option<SubmenuId> {
        self.current
    }

    pub fn current_submenu(&self) -> Option<&Submenu> {
        self.current.and_then(|id| self.submenus.get(&id))
    }

    pub fn current_submenu_mut(&mut self) -> Option<&mut Submenu> {
        self.current.and_then(|id| self.submenus.get_mut(&id))
    }

    pub fn selection_index(&self) -> usize {
        self.selection_index
    }

    /// Move the cursor, clamped to the current page. Returns the index used.
    pub fn set_selection_index(&mut self, index: usize) -> usize {
        let len = self.current_submenu().map_or(0, Submenu::num_options);
        self.selection_index = index.min(len.saturating_sub(1));
        self.selection_index
    }

    pub fn back_stack(&self) -> &[SubmenuId] {
        &self.prev_submenu_ids
    }

    pub fn remembered_selection(&self, id: SubmenuId) -> Option<usize> {
        self.last_selections.get(&id).copied()
    }

    /// The option under the cursor, if there is a current page and the cursor
    /// is on it.
    pub fn get_selected_option(&self) -> Option<&MenuOption> {
        self.current_submenu()?.options().get(self.selection_index)
    }

    pub fn get_selected_option_mut(&mut self) -> Option<&mut MenuOption> {
        let index = self.selection_index;
        self.current_submenu_mut()?.get_option_mut(index)
    }

    /// Remove every submenu whose id is `id` or higher.
    pub fn remove_submenus_at_and_after(&mut self, id: SubmenuId) {
        let removed = self.submenus.split_off(&id);
        for removed_id in removed.keys() {
            self.forget(*removed_id);
        }
        tracing::debug!(from = %id, count = removed.len(), "Removed submenus");
    }

    pub fn remove_submenu(&mut self, id: SubmenuId) {
        if self.submenus.remove(&id).is_some() {
            self.forget(id);
        }
    }

    /// Drop all options from submenu `id`, keeping the page itself.
    pub fn clear_submenu(&mut self, id: SubmenuId) {
        if let Some(submenu) = self.submenus.get_mut(&id) {
            submenu.clear();
            if self.current == Some(id) {
                self.selection_index = 0;
            }
        }
    }

    /// Clear submenu `id` and run its builder again.
    pub fn rebuild_submenu(&mut self, id: SubmenuId) -> bool {
        let Some(submenu) = self.submenus.get_mut(&id) else {
            return false;
        };
        let rebuilt = submenu.rebuild();
        if rebuilt && self.current == Some(id) {
            let len = submenu.num_options();
            self.selection_index = self.selection_index.min(len.saturating_sub(1));
        }
        rebuilt
    }

    /// Forget the current page, the back-stack and every remembered cursor.
    pub fn reset_navigation(&mut self) {
        self.current = None;
        self.selection_index = 0;
        self.prev_submenu_ids.clear();
        self.last_selections.clear();
    }

    fn forget(&mut self, id: SubmenuId) {
        self.last_selections.remove(&id);
        if self.current == Some(id) {
            tracing::debug!(submenu = %id, "Removed the current submenu");
            self.current = None;
            self.selection_index = 0;
        }
    }
}
