//! Storage error types for sqm-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from key-value storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be used as a storage name.
    #[error("Invalid storage key '{0}': use letters, digits, '.', '_' or '-'")]
    InvalidKey(String),

    /// Reading a stored value failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a value failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The marker sequence could not be serialized.
    #[error("Failed to serialize markers: {0}")]
    Serialize(#[from] serde_json::Error),
}
