//! UI Components
//!
//! Leptos components rendering the list model.

mod bulk_actions;
mod filter_bar;
mod new_item_form;
mod priority_selector;
mod todo_item;
mod todo_list;

pub use bulk_actions::BulkActions;
pub use filter_bar::FilterBar;
pub use new_item_form::NewItemForm;
pub use priority_selector::PrioritySelector;
pub use todo_item::TodoItemRow;
pub use todo_list::TodoListView;
