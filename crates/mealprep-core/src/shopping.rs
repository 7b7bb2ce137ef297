//! Shopping List View-Model
//!
//! Derives the rendered sections of the shopping tab from the item
//! collection and the live search string.

use crate::domain::{self, Category, ShoppingItem};
use crate::progress::Progress;

/// Items whose name or category contains `query`, ignoring case.
///
/// An empty query keeps every item, in order.
pub fn filter(items: &[ShoppingItem], query: &str) -> Vec<ShoppingItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Items sharing a category, in list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ShoppingItem>,
}

impl CategoryGroup {
    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }
}

/// Partition items by category.
///
/// Groups come out in order of each category's first appearance.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

pub fn progress(items: &[ShoppingItem]) -> Progress {
    Progress::of(items)
}

/// Flip `checked` on the item with `id`; unknown ids change nothing
pub fn toggle(items: &[ShoppingItem], id: &str) -> Vec<ShoppingItem> {
    domain::toggle(items, id)
}

/// Everything the shopping tab renders for one search string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListView {
    pub groups: Vec<CategoryGroup>,
    /// Number of items left after filtering
    pub matched: usize,
    /// Progress over the whole list, ignoring the search
    pub overall: Progress,
}

impl ShoppingListView {
    pub fn build(items: &[ShoppingItem], query: &str) -> Self {
        let filtered = filter(items, query);
        Self {
            matched: filtered.len(),
            groups: group_by_category(&filtered),
            overall: progress(items),
        }
    }

    /// True when the search matched nothing and the empty state should show
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Progress summary to render, `None` in the empty state
    pub fn summary(&self) -> Option<Progress> {
        if self.is_empty() {
            None
        } else {
            Some(self.overall)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, category: Category) -> ShoppingItem {
        ShoppingItem::new(id, name, "", category)
    }

    fn sample() -> Vec<ShoppingItem> {
        vec![
            make_item("p1", "Red cabbage", Category::Produce),
            make_item("d1", "Feta cheese", Category::Dairy),
            make_item("p2", "Limes", Category::Produce),
            make_item("m1", "Chicken breasts", Category::Meat),
            make_item("d2", "Sour cream", Category::Dairy),
        ]
    }

    #[test]
    fn test_filter_matches_name_or_category() {
        let items = sample();

        let by_name: Vec<_> = filter(&items, "CHEESE").into_iter().map(|i| i.id).collect();
        assert_eq!(by_name, vec!["d1"]);

        let by_category: Vec<_> = filter(&items, "dai").into_iter().map(|i| i.id).collect();
        assert_eq!(by_category, vec!["d1", "d2"]);
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let groups = group_by_category(&sample());
        let order: Vec<_> = groups.iter().map(|g| g.category).collect();

        assert_eq!(order, vec![Category::Produce, Category::Dairy, Category::Meat]);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].id, "p2");
    }

    #[test]
    fn test_category_counts_use_filtered_items() {
        let mut items = sample();
        items[0].checked = true;

        let view = ShoppingListView::build(&items, "red");
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].progress(), Progress { checked: 1, total: 1 });
        assert_eq!(view.overall, Progress { checked: 1, total: 5 });
    }

    #[test]
    fn test_no_match_yields_empty_state() {
        let view = ShoppingListView::build(&sample(), "salmon");

        assert!(view.is_empty());
        assert!(view.groups.is_empty());
        assert_eq!(view.summary(), None);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let items = sample();
        assert_eq!(toggle(&items, "nope"), items);
    }
}
