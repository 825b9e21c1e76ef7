//! Persistence for the task list and the reset marker.
//!
//! [`TodoStore`] is the storage contract shared by the reconciler and the
//! HTTP handlers. Backends are plain storage: no reset logic lives here.
//!
//! Read operations never fail. A missing or corrupt task list reads as an
//! empty list and a missing or unparsable marker reads as `None`. Only
//! writes can fail, with [`StoreError`].
//!
//! # Backends
//!
//! - [`FileStore`]: `todos.json` and `last_updated.txt` in a data directory
//! - [`InMemoryStore`]: process-local, for tests and embedding

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::StoreError;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

/// Text format of the stored reset marker.
pub const MARKER_FORMAT: &str = "%Y-%m-%d";

/// Storage contract for the task list and the reset marker.
///
/// The task list is returned and replaced as a whole. Entries are raw JSON
/// values so that unknown fields, field order, and even malformed entries
/// survive a read-write cycle untouched.
pub trait TodoStore: Send + Sync {
    /// Returns the stored task list, or an empty list if none is readable.
    fn load_tasks(&self) -> Vec<Value>;

    /// Replaces the stored task list wholesale.
    fn save_tasks(&self, tasks: &[Value]) -> Result<(), StoreError>;

    /// Returns the date of the last reset, if one was recorded and parses.
    fn load_reset_marker(&self) -> Option<NaiveDate>;

    /// Overwrites the stored reset marker.
    fn save_reset_marker(&self, date: NaiveDate) -> Result<(), StoreError>;
}

/// Parses a stored marker, tolerating surrounding whitespace.
pub fn parse_marker(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), MARKER_FORMAT).ok()
}

pub fn format_marker(date: NaiveDate) -> String {
    date.format(MARKER_FORMAT).to_string()
}
