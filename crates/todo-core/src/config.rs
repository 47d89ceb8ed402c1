//! Defaults shared by the model and the UI.

use crate::models::{Filter, Priority};

/// Key of the local storage slot holding the serialized item array.
///
/// The format has no version field; bumping the suffix is the migration story.
pub const STORAGE_KEY: &str = "modern-todolist-v1";

/// Priority preselected for a fresh draft.
pub const DEFAULT_PRIORITY: Priority = Priority::Medium;

/// Filter active when the app starts.
pub const DEFAULT_FILTER: Filter = Filter::All;
