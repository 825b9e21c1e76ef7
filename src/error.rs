//! Error types for storage operations.
//!
//! Only write-side failures are errors. Missing or corrupt data on the read
//! side degrades to an empty list or an absent marker and never reaches
//! this type.

use std::io;
use std::path::PathBuf;

/// Errors raised while persisting the task list or the reset marker.
///
/// # Examples
///
/// ```
/// use daily_todo::StoreError;
/// use std::path::PathBuf;
///
/// let err = StoreError::Write {
///     path: PathBuf::from("data/todos.json"),
///     source: std::io::Error::other("disk full"),
/// };
/// assert!(err.to_string().contains("data/todos.json"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage directory did not exist and could not be created.
    #[error("failed to create storage directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing or atomically replacing a storage file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The task list could not be encoded as JSON.
    #[error("failed to serialize task list: {0}")]
    Serialize(#[from] serde_json::Error),
}
