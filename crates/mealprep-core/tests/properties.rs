use std::collections::HashSet;

use mealprep_core::shopping::{filter, group_by_category, progress, toggle};
use mealprep_core::{annotate, Category, CollapseSet, ShoppingItem};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Produce),
        Just(Category::Pantry),
        Just(Category::Dairy),
        Just(Category::Broth),
        Just(Category::Meat),
        Just(Category::Seafood),
    ]
}

/// Lists with unique ids "item-0", "item-1", ...
fn items() -> impl Strategy<Value = Vec<ShoppingItem>> {
    prop::collection::vec(("[a-zA-Z ]{0,12}", category(), any::<bool>()), 0..24).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, category, checked))| ShoppingItem {
                    checked,
                    ..ShoppingItem::new(format!("item-{}", i), name, "", category)
                })
                .collect()
        },
    )
}

/// Instruction-like text mixing numbers, units, verbs and symbols
fn instruction() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("Add".to_string()),
            Just("stir".to_string()),
            Just("10".to_string()),
            Just("4-5".to_string()),
            Just("½".to_string()),
            Just("minutes".to_string()),
            Just("hours,".to_string()),
            Just("°F".to_string()),
            Just("degrees".to_string()),
            Just("tbsp".to_string()),
            Just("-inch".to_string()),
            "[a-z]{1,6}",
            "[ ,.;:()-]{1,2}",
            "\\PC{0,4}",
        ],
        0..16,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn prop_fragments_concatenate_to_input(text in instruction()) {
        let rebuilt: String = annotate(&text).iter().map(|f| f.text).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_fragments_are_never_empty(text in instruction()) {
        prop_assert!(annotate(&text).iter().all(|f| !f.text.is_empty()));
    }

    #[test]
    fn prop_toggle_twice_is_identity(items in items(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let id = items[pick.index(items.len())].id.clone();

        let once = toggle(&items, &id);
        let flipped = once.iter().zip(&items).filter(|(a, b)| a.checked != b.checked).count();
        prop_assert_eq!(flipped, 1);
        prop_assert_eq!(toggle(&once, &id), items);
    }

    #[test]
    fn prop_empty_query_keeps_everything(items in items()) {
        prop_assert_eq!(filter(&items, ""), items);
    }

    #[test]
    fn prop_groups_partition_input(items in items(), query in "[a-z]{0,2}") {
        let filtered = filter(&items, &query);
        let groups = group_by_category(&filtered);

        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        prop_assert_eq!(total, filtered.len());
        for group in &groups {
            prop_assert!(group.items.iter().all(|i| i.category == group.category));
        }
        let distinct: HashSet<_> = groups.iter().map(|g| g.category).collect();
        prop_assert_eq!(distinct.len(), groups.len());

        let mut ids: Vec<_> = groups.iter().flat_map(|g| g.items.iter().map(|i| i.id.clone())).collect();
        let mut expected: Vec<_> = filtered.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        expected.sort();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_percent_is_bounded(items in items()) {
        let p = progress(&items);
        match p.percent() {
            None => prop_assert!(items.is_empty()),
            Some(percent) => {
                prop_assert!(percent <= 100);
                prop_assert_eq!(percent == 100, items.iter().all(|i| i.checked));
            }
        }
    }

    #[test]
    fn prop_collapse_toggle_twice_restores(ids in prop::collection::vec("[a-z]{1,3}", 0..8), id in "[a-z]{1,3}") {
        let mut set = CollapseSet::new();
        for existing in &ids {
            set.toggle(existing);
        }
        let before = set.clone();
        set.toggle(&id);
        prop_assert_ne!(set.is_collapsed(&id), before.is_collapsed(&id));
        set.toggle(&id);
        prop_assert_eq!(set, before);
    }
}
