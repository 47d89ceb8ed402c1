//! Application Context
//!
//! The list model lives in one signal shared via the Leptos Context API.
//! Components read through [`AppContext::with`] and change state only through
//! the model's own methods.

use leptos::prelude::*;
use todo_core::{StoreResult, TodoList, TodoStore};

use crate::storage::BrowserStorage;

pub type AppList = TodoList<BrowserStorage>;

/// App-wide handle to the list model
#[derive(Clone, Copy)]
pub struct AppContext {
    list: RwSignal<AppList>,
}

impl AppContext {
    /// Load persisted items and wrap the model in a signal
    pub fn load() -> Self {
        let list = TodoList::open(TodoStore::new(BrowserStorage));
        log::info!("[APP] Started with {} items", list.items().len());
        Self {
            list: RwSignal::new(list),
        }
    }

    /// Read from the model, tracking the signal
    pub fn with<R>(&self, f: impl FnOnce(&AppList) -> R) -> R {
        self.list.with(f)
    }

    /// Change session-only state (draft, search, filter, edit buffer)
    pub fn session(&self, f: impl FnOnce(&mut AppList)) {
        self.list.update(f);
    }

    /// Run a persisting mutation; a storage failure is logged and dropped
    pub fn mutate<R>(&self, action: &str, f: impl FnOnce(&mut AppList) -> StoreResult<R>) -> Option<R> {
        match self.list.try_update(f)? {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("[APP] {} not saved: {}", action, e);
                None
            }
        }
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
