//! Cart store errors.
//!
//! Provides a unified `CartError` type for the store's mutating operations.
//! Malformed persisted data is not an error here: `CartStore::load` recovers
//! from it by starting empty.

use thiserror::Error;

use crate::storage::StorageError;

/// Error returned when a cart change could not be persisted.
///
/// The in-memory cart is unchanged when this is returned.
#[derive(Debug, Error)]
pub enum CartError {
    /// Writing the snapshot to storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serializing the snapshot failed.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
