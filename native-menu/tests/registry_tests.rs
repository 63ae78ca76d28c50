use native_menu::{MenuRegistry, OptionKind, Submenu, SubmenuId};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn three_options(id: i32) -> impl Fn(&mut Submenu) + 'static {
    move |sub: &mut Submenu| {
        sub.add_regular_option(&format!("{id}-a"), "")
            .add_regular_option(&format!("{id}-b"), "")
            .add_regular_option(&format!("{id}-c"), "");
    }
}

fn registry(ids: &[i32]) -> MenuRegistry {
    let mut menu = MenuRegistry::new();
    for &id in ids {
        menu.add_submenu("Header", "Sub", SubmenuId(id), 8, three_options(id));
    }
    menu
}

mod lookup_tests {
    use super::*;

    #[test]
    fn added_submenu_is_reachable() {
        let menu = registry(&[7]);
        assert!(menu.does_submenu_exist(SubmenuId(7)));
        assert!(!menu.does_submenu_exist(SubmenuId(8)));
        let sub = menu.get_submenu(SubmenuId(7)).unwrap();
        assert_eq!(sub.id(), SubmenuId(7));
        assert_eq!(sub.header(), "Header");
    }

    #[test]
    fn re_adding_replaces_options() {
        let mut menu = registry(&[7]);
        menu.add_submenu("Replacement", "", SubmenuId(7), 4, |sub| {
            sub.add_page_break("empty for now");
        });
        let sub = menu.get_submenu(SubmenuId(7)).unwrap();
        assert_eq!(sub.header(), "Replacement");
        assert_eq!(sub.num_options(), 1);
        assert!(sub.get_option(0).unwrap().is_page_break());
    }

    #[test]
    fn bulk_removal_keeps_lower_ids() {
        let mut menu = registry(&[3, 4, 5, 6]);
        menu.remove_submenus_at_and_after(SubmenuId(5));
        assert!(menu.does_submenu_exist(SubmenuId(3)));
        assert!(menu.does_submenu_exist(SubmenuId(4)));
        assert!(!menu.does_submenu_exist(SubmenuId(5)));
        assert!(!menu.does_submenu_exist(SubmenuId(6)));
    }

    #[test]
    fn removing_unknown_ids_is_a_no_op() {
        let mut menu = registry(&[1]);
        menu.remove_submenu(SubmenuId(2));
        menu.clear_submenu(SubmenuId(2));
        menu.remove_submenus_at_and_after(SubmenuId(10));
        assert_eq!(menu.submenu_ids().count(), 1);
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn returning_restores_previous_cursor() {
        let mut menu = registry(&[1, 2]);
        menu.go_to_submenu(SubmenuId(1), true);
        menu.set_selection_index(1);
        menu.go_to_submenu(SubmenuId(2), true);
        menu.go_to_submenu(SubmenuId(1), true);
        assert_eq!(menu.selection_index(), 1);
        assert_eq!(menu.get_selected_option().unwrap().text(), "1-b");
    }

    #[test]
    fn returning_to_never_left_page_starts_at_zero() {
        let mut menu = registry(&[1, 2]);
        menu.go_to_submenu(SubmenuId(2), true);
        menu.set_selection_index(2);
        menu.go_to_submenu(SubmenuId(1), true);
        assert_eq!(menu.selection_index(), 0);
    }

    #[test]
    fn unknown_target_keeps_position() {
        let mut menu = registry(&[1, 2]);
        menu.go_to_submenu(SubmenuId(1), false);
        menu.go_to_submenu(SubmenuId(2), false);
        menu.set_selection_index(2);
        menu.go_to_submenu(SubmenuId(99), true);
        assert_eq!(menu.current_submenu_id(), Some(SubmenuId(2)));
        assert_eq!(menu.selection_index(), 2);
        assert_eq!(menu.back_stack(), [SubmenuId(1)]);
    }

    #[test]
    fn three_levels_deep_and_back() {
        let mut menu = registry(&[1, 2, 3]);
        menu.go_to_submenu(SubmenuId(1), false);
        menu.set_selection_index(2);
        menu.go_to_submenu(SubmenuId(2), false);
        menu.set_selection_index(1);
        menu.go_to_submenu(SubmenuId(3), false);
        assert_eq!(menu.back_stack(), [SubmenuId(1), SubmenuId(2)]);

        menu.go_to_submenu(SubmenuId(2), true);
        assert_eq!(menu.selection_index(), 1);
        menu.go_to_submenu(SubmenuId(1), true);
        assert_eq!(menu.selection_index(), 2);
        assert!(menu.back_stack().is_empty());
    }

    #[test]
    fn rebuilding_a_dynamic_section() {
        let mut menu = registry(&[0]);
        let generation = Rc::new(Cell::new(0));
        for id in 10..13 {
            let generation = Rc::clone(&generation);
            menu.add_submenu("Dynamic", "", SubmenuId(id), 8, move |sub| {
                sub.add_regular_option(&format!("gen {}", generation.get()), "");
            });
        }

        generation.set(1);
        menu.remove_submenus_at_and_after(SubmenuId(10));
        let generation_in_builder = Rc::clone(&generation);
        menu.add_submenu("Dynamic", "", SubmenuId(10), 8, move |sub| {
            sub.add_regular_option(&format!("gen {}", generation_in_builder.get()), "");
        });

        assert_eq!(menu.submenu_ids().count(), 2);
        let option = menu.get_submenu(SubmenuId(10)).unwrap().get_option(0).unwrap();
        assert_eq!(option.text(), "gen 1");
    }
}

mod option_tests {
    use super::*;

    #[test]
    fn mixed_options_count_and_index() {
        let flag = Rc::new(Cell::new(false));
        let mut menu = MenuRegistry::new();
        let flag_in_builder = Rc::clone(&flag);
        menu.add_submenu("Player", "", SubmenuId(1), 8, move |sub| {
            sub.add_regular_option("a", "")
                .add_regular_option("b", "")
                .add_regular_option("c", "")
                .add_bool_option("Never Wanted", "", &flag_in_builder);
        });

        let sub = menu.get_submenu(SubmenuId(1)).unwrap();
        assert_eq!(sub.num_options(), 4);
        let option = sub.get_option(3).unwrap();
        assert_eq!(option.index(), 3);
        assert!(matches!(option.kind(), OptionKind::Bool { .. }));
    }

    #[test]
    fn toggling_through_registry_updates_caller_flag() {
        let flag = Rc::new(Cell::new(false));
        let mut menu = MenuRegistry::new();
        let flag_in_builder = Rc::clone(&flag);
        menu.add_submenu("Player", "", SubmenuId(1), 8, move |sub| {
            sub.add_bool_option("Infinite Ammo", "", &flag_in_builder);
        });
        menu.go_to_submenu(SubmenuId(1), false);
        menu.get_selected_option_mut().unwrap().activate();
        assert!(flag.get());
    }

    #[test]
    fn cleared_submenu_has_no_options() {
        let mut menu = registry(&[1]);
        menu.clear_submenu(SubmenuId(1));
        let sub = menu.get_submenu(SubmenuId(1)).unwrap();
        assert_eq!(sub.num_options(), 0);
        assert!(sub.get_option(0).is_none());
    }

    #[test]
    fn numbered_vector_labels() {
        let mut menu = MenuRegistry::new();
        menu.add_submenu("World", "", SubmenuId(1), 8, |sub| {
            sub.add_numbered_vector_option("Level", "", 3, "Lvl ", "");
        });
        let option = menu.get_submenu(SubmenuId(1)).unwrap().get_option(0).unwrap();
        assert_eq!(option.choices().unwrap(), ["Lvl 0", "Lvl 1", "Lvl 2"]);
    }
}

proptest! {
    #[test]
    fn indices_stay_dense_after_deletions(
        count in 1usize..20,
        deletions in proptest::collection::vec(0usize..25, 0..10),
    ) {
        let mut sub = Submenu::new("p", "", SubmenuId(0), 8);
        for i in 0..count {
            sub.add_regular_option(&i.to_string(), "");
        }
        for index in deletions {
            let existed = index < sub.num_options();
            prop_assert_eq!(sub.delete_option(index), existed);
        }
        for (i, option) in sub.options().iter().enumerate() {
            prop_assert_eq!(option.index(), i);
        }
    }
}
