//! Persistence errors.

use thiserror::Error;

/// Result type for operations that touch the storage slot
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a key-value backend or while encoding items
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    /// The backend rejected a write, e.g. quota exceeded
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}
