//! Sample trainer menu used by the terminal host.
//!
//! Ids grow with depth so both the explicit push/pop used by the controller
//! and the id-order inference of `go_to_submenu` agree. The stable page is
//! rebuilt and the horse pages after it are recreated whenever a horse is
//! bought or sold.

use native_menu::{MenuController, MenuEvent, SubmenuId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const MAIN: SubmenuId = SubmenuId(0);
pub const PLAYER: SubmenuId = SubmenuId(1);
pub const WORLD: SubmenuId = SubmenuId(2);
pub const STABLE: SubmenuId = SubmenuId(10);
/// First horse detail page; horse `i` lives at `HORSE_PAGES + i`.
pub const HORSE_PAGES: SubmenuId = SubmenuId(100);

const BREEDS: [&str; 4] = ["Arabian", "Mustang", "Shire", "Appaloosa"];
const WEATHER: [&str; 5] = ["Sunny", "Cloudy", "Rain", "Thunder", "Snow"];

/// Game-side state the menu reads and writes.
#[derive(Debug, Default, Clone)]
pub struct DemoState {
    pub god_mode: Rc<Cell<bool>>,
    pub infinite_ammo: Rc<Cell<bool>>,
    pub weather: Rc<Cell<usize>>,
    pub hour: Rc<Cell<usize>>,
    pub health: Rc<Cell<u32>>,
    pub horses: Rc<RefCell<Vec<String>>>,
    pub next_breed: Rc<Cell<usize>>,
}

impl DemoState {
    pub fn weather_name(&self) -> &'static str {
        WEATHER[self.weather.get() % WEATHER.len()]
    }
}

pub fn build_menu(menu: &mut MenuController, state: &DemoState) {
    menu.add_submenu("Trainer", "Main Menu", MAIN, |sub| {
        sub.add_submenu_option("Player", "Player options", PLAYER)
            .add_submenu_option("World", "Weather and time", WORLD)
            .add_page_break("")
            .add_submenu_option("Stable", "Buy and sell horses", STABLE);
    });

    let player = state.clone();
    menu.add_submenu("Player", "Player Options", PLAYER, move |sub| {
        let health = Rc::clone(&player.health);
        sub.add_regular_option_with("Heal", "Restore full health", move || {
            health.set(100);
            tracing::info!("Player healed");
        })
        .add_bool_option_with(
            "God Mode",
            "Take no damage",
            &player.god_mode,
            |on| tracing::info!(on, "God mode toggled"),
        )
        .add_bool_option("Infinite Ammo", "Never reload", &player.infinite_ammo);
    });

    let world = state.clone();
    menu.add_submenu("World", "World Options", WORLD, move |sub| {
        let weather = Rc::clone(&world.weather);
        let hour = Rc::clone(&world.hour);
        sub.add_vector_option_with("Weather", "Change the weather", WEATHER, move |i, label| {
            weather.set(i);
            tracing::info!(weather = label, "Weather changed");
        })
        .add_numbered_vector_option_with("Hour", "Set the time of day", 24, "", ":00", move |i, _| {
            hour.set(i)
        });
    });

    build_stable(menu, state);
}

/// Refresh the stable page from the owned horses and recreate one detail
/// page per horse.
pub fn build_stable(menu: &mut MenuController, state: &DemoState) {
    if !menu.registry_mut().rebuild_submenu(STABLE) {
        let stable = state.clone();
        menu.add_submenu("Stable", "Your Horses", STABLE, move |sub| {
            let breed = BREEDS[stable.next_breed.get() % BREEDS.len()];
            sub.add_regular_option("Buy Horse", &format!("Buy a {}", breed));
            let horses = stable.horses.borrow();
            if !horses.is_empty() {
                sub.add_page_break("Owned");
            }
            for (i, name) in horses.iter().enumerate() {
                sub.add_submenu_option(name, "Manage this horse", horse_page(i));
            }
        });
    }

    menu.registry_mut().remove_submenus_at_and_after(HORSE_PAGES);
    let names = state.horses.borrow().clone();
    for (i, name) in names.into_iter().enumerate() {
        menu.add_submenu(&name, "Horse", horse_page(i), |sub| {
            sub.add_numbered_vector_option("Speed", "Training level", 5, "Lvl ", "")
                .add_regular_option("Sell", "Sell this horse");
        });
    }
}

fn horse_page(i: usize) -> SubmenuId {
    let offset = i32::try_from(i).unwrap_or(i32::MAX);
    SubmenuId(HORSE_PAGES.0.saturating_add(offset))
}

/// React to menu events that need the registry itself: buying and selling
/// reshape the stable section.
pub fn handle_event(menu: &mut MenuController, state: &DemoState, event: MenuEvent) {
    let MenuEvent::Activated { submenu, index } = event else {
        return;
    };

    if submenu == STABLE && index == 0 {
        let breed = BREEDS[state.next_breed.get() % BREEDS.len()];
        let name = format!("{} #{}", breed, state.horses.borrow().len() + 1);
        tracing::info!(horse = %name, "Bought horse");
        state.horses.borrow_mut().push(name);
        state.next_breed.set(state.next_breed.get() + 1);
        build_stable(menu, state);
        menu.registry_mut().set_selection_index(index);
    } else if submenu >= HORSE_PAGES && index == 1 {
        let horse = usize::try_from(submenu.0 - HORSE_PAGES.0).unwrap_or(usize::MAX);
        {
            let mut horses = state.horses.borrow_mut();
            if horse < horses.len() {
                let sold = horses.remove(horse);
                tracing::info!(horse = %sold, "Sold horse");
            }
        }
        // Leave the page before it disappears.
        if menu.registry_mut().pop_submenu().is_err() {
            tracing::warn!("Sold a horse without a stable page to return to");
        }
        build_stable(menu, state);
        menu.registry_mut().set_selection_index(0);
    }
}
