//! Error types for storage operations.

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable storage directory could be determined
    #[error("No storage directory available")]
    NoStorageDir,

    /// Key contains characters that cannot form a file name
    #[error("Invalid storage key: {key:?}")]
    InvalidKey {
        /// The rejected key
        key: String,
    },
}

impl StoreError {
    /// Create an invalid key error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }
}
