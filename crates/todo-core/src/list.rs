//! List Model
//!
//! Owns the item collection and the transient session state (draft, search,
//! filter, edit-in-progress). Every method that changes the items writes the
//! whole collection back through the [`TodoStore`] exactly once; session-only
//! setters never touch storage.

use chrono::Utc;
use uuid::Uuid;

use crate::config::{DEFAULT_FILTER, DEFAULT_PRIORITY};
use crate::error::StoreResult;
use crate::models::{Filter, Item, Priority};
use crate::store::{KeyValueStore, TodoStore};
use crate::view::{self, Summary};

/// The one item currently being edited and its scratch text
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditState {
    id: String,
    text: String,
}

/// Items plus session state, mutated only through the methods below
#[derive(Debug)]
pub struct TodoList<B> {
    /// Insertion order, newest first
    items: Vec<Item>,
    draft_text: String,
    draft_priority: Priority,
    search_query: String,
    filter: Filter,
    editing: Option<EditState>,
    store: TodoStore<B>,
}

impl<B: KeyValueStore> TodoList<B> {
    /// Seed the list from whatever the store holds
    pub fn open(store: TodoStore<B>) -> Self {
        let items = store.load();
        Self {
            items,
            draft_text: String::new(),
            draft_priority: DEFAULT_PRIORITY,
            search_query: String::new(),
            filter: DEFAULT_FILTER,
            editing: None,
            store,
        }
    }

    // ========================
    // Read accessors
    // ========================

    /// All items in storage order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn draft_priority(&self) -> Priority {
        self.draft_priority
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|edit| edit.id.as_str())
    }

    /// Scratch text of the open edit, empty when none
    pub fn editing_text(&self) -> &str {
        self.editing.as_ref().map_or("", |edit| edit.text.as_str())
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }

    /// Filtered, searched and sorted items for display
    pub fn visible_items(&self) -> Vec<&Item> {
        view::visible_items(&self.items, self.filter, &self.search_query)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.items)
    }

    pub fn remaining_count(&self) -> usize {
        self.summary().remaining
    }

    pub fn completed_count(&self) -> usize {
        self.summary().completed
    }

    /// Whether `toggle_all` would complete everything (vs. reset everything)
    pub fn has_incomplete(&self) -> bool {
        self.items.iter().any(|item| !item.completed)
    }

    // ========================
    // Session state
    // ========================

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft_priority = priority;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Begin editing `id`, replacing any edit already open.
    /// Returns false when no such item exists.
    pub fn start_edit(&mut self, id: &str) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let edit = EditState {
            id: item.id.clone(),
            text: item.text.clone(),
        };
        self.editing = Some(edit);
        true
    }

    /// Update the scratch text; ignored when no edit is open
    pub fn set_editing_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ========================
    // Mutations
    // ========================

    /// Prepend a new item. Blank text is rejected without a write.
    ///
    /// Returns the new item's id, or `None` when rejected.
    pub fn add(&mut self, text: &str, priority: Priority) -> StoreResult<Option<String>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let item = Item::new(
            Uuid::new_v4().to_string(),
            text.to_string(),
            self.next_created_at(),
            priority,
        );
        let id = item.id.clone();
        log::debug!("[TODO] Added {} ({})", id, priority.as_str());

        self.items.insert(0, item);
        self.draft_text.clear();
        self.draft_priority = DEFAULT_PRIORITY;
        self.persist()?;
        Ok(Some(id))
    }

    /// Add the current draft text with the draft priority
    pub fn submit_draft(&mut self) -> StoreResult<Option<String>> {
        let text = std::mem::take(&mut self.draft_text);
        let result = self.add(&text, self.draft_priority);
        if matches!(result, Ok(None)) {
            // Rejected: keep what the user typed
            self.draft_text = text;
        }
        result
    }

    /// Flip `completed` on `id`. Returns whether the item exists.
    pub fn toggle(&mut self, id: &str) -> StoreResult<bool> {
        let found = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(found)
    }

    /// Remove `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if self.is_editing(id) {
            self.editing = None;
        }
        self.persist()?;
        Ok(removed)
    }

    /// Apply the scratch text to the edited item and close the edit.
    ///
    /// The edit is closed whatever happens. Blank text or a vanished item
    /// leaves the collection untouched, skips the write and returns false.
    pub fn commit_edit(&mut self) -> StoreResult<bool> {
        let Some(edit) = self.editing.take() else {
            return Ok(false);
        };

        let text = edit.text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == edit.id) else {
            return Ok(false);
        };
        item.text = text.to_string();
        log::debug!("[TODO] Edited {}", edit.id);

        self.persist()?;
        Ok(true)
    }

    /// Complete everything if anything is incomplete, otherwise reset everything
    pub fn toggle_all(&mut self) -> StoreResult<()> {
        let complete = self.has_incomplete();
        for item in &mut self.items {
            item.completed = complete;
        }
        self.persist()
    }

    /// Drop every completed item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> StoreResult<usize> {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();

        let edit_removed = self
            .editing
            .as_ref()
            .is_some_and(|edit| self.get(&edit.id).is_none());
        if edit_removed {
            self.editing = None;
        }

        log::debug!("[TODO] Cleared {} completed items", removed);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> StoreResult<()> {
        self.store.save(&self.items)
    }

    /// Wall-clock millis, bumped past the newest existing item (saturating at `i64::MAX`)
    fn next_created_at(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.items.iter().map(|item| item.created_at).max() {
            Some(newest) if newest >= now => newest.saturating_add(1),
            _ => now,
        }
    }
}
