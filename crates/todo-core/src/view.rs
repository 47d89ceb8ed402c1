//! Derived View
//!
//! Pure helpers computing what the list shows from the current items,
//! filter and search query. Nothing here is cached or persisted.

use crate::models::{Filter, Item};

/// Counts shown in the footer and used to enable the bulk actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

impl Summary {
    pub fn of(items: &[Item]) -> Self {
        let remaining = items.iter().filter(|item| !item.completed).count();
        Self {
            total: items.len(),
            remaining,
            completed: items.len() - remaining,
        }
    }
}

/// Filter by completion state, then by search text, then sort for display.
///
/// Incomplete items come first; inside each group the newest item leads.
/// The search is a case-insensitive substring match on the trimmed query.
pub fn visible_items<'a>(items: &'a [Item], filter: Filter, query: &str) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();

    let mut visible: Vec<&Item> = items
        .iter()
        .filter(|item| filter.matches(item))
        .filter(|item| needle.is_empty() || item.text.to_lowercase().contains(&needle))
        .collect();

    // Stable: equal keys keep collection order
    visible.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_item(id: &str, text: &str, created_at: i64, completed: bool) -> Item {
        let mut item = Item::new(id.to_string(), text.to_string(), created_at, Priority::Medium);
        item.completed = completed;
        item
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item("4", "Read book", 40, true),
            make_item("3", "Buy MILK", 30, false),
            make_item("2", "call mom", 20, true),
            make_item("1", "buy bread", 10, false),
        ]
    }

    #[test]
    fn test_sort_incomplete_first_then_newest() {
        let items = sample();
        let view = visible_items(&items, Filter::All, "");

        // Should be: 3, 1 (incomplete, newest first), then 4, 2 (completed)
        assert_eq!(ids(&view), vec!["3", "1", "4", "2"]);
    }

    #[test]
    fn test_filter_active_and_completed() {
        let items = sample();
        assert_eq!(ids(&visible_items(&items, Filter::Active, "")), vec!["3", "1"]);
        assert_eq!(ids(&visible_items(&items, Filter::Completed, "")), vec!["4", "2"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let items = sample();
        assert_eq!(ids(&visible_items(&items, Filter::All, "  BUY ")), vec!["3", "1"]);
        assert_eq!(ids(&visible_items(&items, Filter::All, "milk")), vec!["3"]);
        assert!(visible_items(&items, Filter::All, "xyz").is_empty());
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let items = sample();
        assert_eq!(visible_items(&items, Filter::All, "   ").len(), 4);
    }

    #[test]
    fn test_search_combines_with_filter() {
        let items = sample();
        assert!(visible_items(&items, Filter::Completed, "buy").is_empty());
        assert_eq!(ids(&visible_items(&items, Filter::Completed, "MOM")), vec!["2"]);
    }

    #[test]
    fn test_equal_timestamps_keep_collection_order() {
        let items = vec![
            make_item("b", "second", 5, false),
            make_item("a", "first", 5, false),
        ];
        assert_eq!(ids(&visible_items(&items, Filter::All, "")), vec!["b", "a"]);
    }

    #[test]
    fn test_summary() {
        let summary = Summary::of(&sample());
        assert_eq!(summary, Summary { total: 4, remaining: 2, completed: 2 });
        assert_eq!(Summary::of(&[]), Summary::default());
    }
}
