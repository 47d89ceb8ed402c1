//! Persistence Adapter
//!
//! Reads and writes the whole item collection as one JSON array under a
//! fixed key. The concrete slot sits behind [`KeyValueStore`] so the browser
//! and the tests can plug in their own backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::config::STORAGE_KEY;
use crate::error::{StoreError, StoreResult};
use crate::models::Item;

/// A synchronous string key-value slot (browser local storage, memory, ...)
pub trait KeyValueStore {
    /// Read the raw value at `key`, `None` when absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value at `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Item collection persisted under a single key
#[derive(Debug, Clone)]
pub struct TodoStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> TodoStore<B> {
    /// Store using the well-known [`STORAGE_KEY`]
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the persisted items.
    ///
    /// Never fails: a missing key, an unreadable backend, malformed JSON or a
    /// payload that is not an array of items all come back as an empty list.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("[STORE] No data under `{}`, starting empty", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("[STORE] {}, starting empty", e);
                return Vec::new();
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[STORE] Malformed JSON under `{}`: {}", self.key, e);
                return Vec::new();
            }
        };

        if !value.is_array() {
            log::warn!("[STORE] Value under `{}` is not an array, ignoring", self.key);
            return Vec::new();
        }

        match serde_json::from_value::<Vec<Item>>(value) {
            Ok(items) => {
                log::info!("[STORE] Loaded {} items", items.len());
                items
            }
            Err(e) => {
                log::warn!("[STORE] Unreadable items under `{}`: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Serialize `items` and overwrite the slot
    pub fn save(&self, items: &[Item]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(&self.key, &raw)?;
        log::debug!("[STORE] Saved {} items", items.len());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory backend.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the model wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with one raw value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().values.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value currently held at `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    /// Make subsequent writes fail as if the quota were exhausted
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn sample_items() -> Vec<Item> {
        let mut done = Item::new("b".to_string(), "walk dog".to_string(), 20, Priority::Low);
        done.completed = true;
        vec![
            done,
            Item::new("a".to_string(), "buy milk".to_string(), 10, Priority::High),
        ]
    }

    #[test]
    fn test_save_then_load() {
        let store = TodoStore::new(MemoryStore::new());
        let items = sample_items();

        store.save(&items).unwrap();
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = TodoStore::new(MemoryStore::new());
        store.save(&sample_items()).unwrap();
        store.save(&[]).unwrap();

        assert_eq!(store.backend().raw(STORAGE_KEY).as_deref(), Some("[]"));
        assert_eq!(store.backend().writes(), 2);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_absent_key() {
        let store = TodoStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_json() {
        let store = TodoStore::new(MemoryStore::with_value(STORAGE_KEY, "{not json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_non_array() {
        let store = TodoStore::new(MemoryStore::with_value(STORAGE_KEY, r#"{"id":"a"}"#));
        assert!(store.load().is_empty());

        let store = TodoStore::new(MemoryStore::with_value(STORAGE_KEY, "42"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_array_with_bad_element() {
        let raw = r#"[{"id":"a","text":"ok","completed":false,"createdAt":1,"priority":"low"},{"id":"b"}]"#;
        let store = TodoStore::new(MemoryStore::with_value(STORAGE_KEY, raw));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let backend = MemoryStore::new();
        let store = TodoStore::with_key(backend.clone(), "other-slot");
        store.save(&sample_items()).unwrap();

        assert!(backend.raw(STORAGE_KEY).is_none());
        assert!(backend.raw("other-slot").is_some());
        assert!(TodoStore::new(backend).load().is_empty());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let backend = MemoryStore::new();
        backend.set_fail_writes(true);
        let store = TodoStore::new(backend);

        let err = store.save(&sample_items()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(store.backend().writes(), 0);
    }
}
