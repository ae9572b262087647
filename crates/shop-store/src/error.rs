//! Store error types.

use shop_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur when reading or writing the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the snapshot file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize the snapshot.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the lock.
    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for CommerceError {
    fn from(e: StoreError) -> Self {
        CommerceError::Store(e.to_string())
    }
}
