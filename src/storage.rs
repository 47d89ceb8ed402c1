//! Browser Storage Backend
//!
//! `window.localStorage` as a [`KeyValueStore`].

use todo_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Handle to the page's local storage.
///
/// Holds nothing itself; the `Storage` object is looked up on every call so
/// the handle stays `Send + Sync` for use inside a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_reason(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}

/// Best-effort text for a thrown JS value (DOMException, string, ...)
fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
