//! Todo Core
//!
//! Framework-free core of the Modern Todo list:
//! - models: persisted items plus the priority and filter enums
//! - store: persistence adapter over a key-value slot
//! - view: derived, read-only projection (filter, search, sort, counts)
//! - list: the list model owning items and session state

pub mod config;
mod error;
pub mod list;
pub mod models;
pub mod store;
pub mod view;

pub use error::{StoreError, StoreResult};
pub use list::TodoList;
pub use models::{Filter, Item, Priority};
pub use store::{KeyValueStore, MemoryStore, TodoStore};
pub use view::Summary;
