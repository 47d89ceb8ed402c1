//! Property tests for the list model, derived view and store round-trip.

use proptest::prelude::*;
use todo_core::view::visible_items;
use todo_core::{Filter, Item, MemoryStore, Priority, TodoList, TodoStore};

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Low), Just(Priority::Medium), Just(Priority::High)]
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![Just(Filter::All), Just(Filter::Active), Just(Filter::Completed)]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        "[a-f0-9]{8}",
        "[a-zA-Z][a-zA-Z ]{0,20}",
        any::<bool>(),
        0i64..1_000,
        priority_strategy(),
    )
        .prop_map(|(id, text, completed, created_at, priority)| {
            let mut item = Item::new(id, text, created_at, priority);
            item.completed = completed;
            item
        })
}

fn empty_list() -> TodoList<MemoryStore> {
    TodoList::open(TodoStore::new(MemoryStore::new()))
}

proptest! {
    #[test]
    fn test_only_non_blank_adds_grow_the_list(texts in prop::collection::vec("[ a-z]{0,6}", 0..20)) {
        let mut list = empty_list();
        for text in &texts {
            list.add(text, Priority::Medium).unwrap();
        }

        let expected = texts.iter().filter(|t| !t.trim().is_empty()).count();
        prop_assert_eq!(list.items().len(), expected);
        prop_assert!(list.items().iter().all(|item| !item.text.trim().is_empty()));
    }

    #[test]
    fn test_created_at_strictly_decreases_in_storage_order(count in 1usize..15) {
        let mut list = empty_list();
        for i in 0..count {
            list.add(&format!("item {}", i), Priority::Low).unwrap();
        }

        for pair in list.items().windows(2) {
            prop_assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[test]
    fn test_toggle_is_an_involution(count in 1usize..8, pick in any::<prop::sample::Index>()) {
        let mut list = empty_list();
        for i in 0..count {
            list.add(&format!("item {}", i), Priority::Medium).unwrap();
        }
        let before = list.items().to_vec();
        let id = before[pick.index(count)].id.clone();

        list.toggle(&id).unwrap();
        list.toggle(&id).unwrap();
        prop_assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_clear_completed_leaves_nothing_completed(flags in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut list = empty_list();
        for (i, done) in flags.iter().enumerate() {
            let id = list.add(&format!("item {}", i), Priority::High).unwrap().unwrap();
            if *done {
                list.toggle(&id).unwrap();
            }
        }

        list.clear_completed().unwrap();
        prop_assert_eq!(list.completed_count(), 0);
        prop_assert_eq!(list.remaining_count(), flags.iter().filter(|d| !**d).count());
    }

    #[test]
    fn test_toggle_all_twice_round_trips_uniform_lists(count in 0usize..8, done in any::<bool>()) {
        let mut list = empty_list();
        for i in 0..count {
            let id = list.add(&format!("item {}", i), Priority::Low).unwrap().unwrap();
            if done {
                list.toggle(&id).unwrap();
            }
        }
        let before = list.items().to_vec();

        list.toggle_all().unwrap();
        list.toggle_all().unwrap();
        prop_assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_view_orders_incomplete_first_then_newest(
        items in prop::collection::vec(item_strategy(), 0..20),
        filter in filter_strategy(),
        query in "[a-z]{0,2}",
    ) {
        let view = visible_items(&items, filter, &query);

        for pair in view.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(!a.completed || b.completed, "completed item before incomplete one");
            if a.completed == b.completed {
                prop_assert!(a.created_at >= b.created_at);
            }
        }
        prop_assert!(view.iter().all(|item| filter.matches(item)));
    }

    #[test]
    fn test_save_then_load_round_trips(items in prop::collection::vec(item_strategy(), 0..20)) {
        let store = TodoStore::new(MemoryStore::new());
        store.save(&items).unwrap();
        prop_assert_eq!(store.load(), items);
    }

    #[test]
    fn test_load_never_fails_on_garbage(raw in ".{0,40}") {
        let store = TodoStore::new(MemoryStore::with_value(todo_core::config::STORAGE_KEY, &raw));
        let _ = store.load();
    }
}

#[test]
fn test_toggle_all_twice_from_mixed_does_not_round_trip() {
    let mut list = empty_list();
    let a = list.add("a", Priority::Low).unwrap().unwrap();
    list.add("b", Priority::Low).unwrap();
    list.toggle(&a).unwrap();
    let before = list.items().to_vec();

    list.toggle_all().unwrap();
    list.toggle_all().unwrap();

    assert_ne!(list.items(), before.as_slice());
    assert!(list.items().iter().all(|item| !item.completed));
}
