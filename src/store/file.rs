//! File-backed store.
//!
//! Layout inside the data directory:
//!
//! ```text
//! data/
//! ├── todos.json         JSON array of task objects
//! └── last_updated.txt   reset marker, `YYYY-MM-DD`
//! ```
//!
//! Writes go to a temporary file in the same directory, are fsynced, and
//! are then renamed over the target, so readers see either the old file or
//! the new one and never a partial write.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{format_marker, parse_marker, TodoStore};
use crate::error::StoreError;

/// File holding the task list.
pub const TODOS_FILE: &str = "todos.json";

/// File holding the reset marker.
pub const MARKER_FILE: &str = "last_updated.txt";

/// Task list and reset marker stored as files in one directory.
///
/// The directory is created on the first write, not on construction.
///
/// # Examples
///
/// ```no_run
/// use daily_todo::{FileStore, TodoStore};
///
/// let store = FileStore::new("data");
/// assert!(store.load_tasks().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn todos_path(&self) -> PathBuf {
        self.data_dir.join(TODOS_FILE)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.data_dir.join(MARKER_FILE)
    }

    fn ensure_data_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })
    }

    /// Reads a file, mapping "not found" to `None` and logging other failures.
    fn read_optional(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable storage file, treating as absent"
                );
                None
            },
        }
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), StoreError> {
        self.ensure_data_dir()?;

        let write_err = |source: io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.data_dir).map_err(write_err)?;
        tmp.write_all(contents).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), bytes = contents.len(), "storage file replaced");
        Ok(())
    }
}

impl TodoStore for FileStore {
    fn load_tasks(&self) -> Vec<Value> {
        let path = self.todos_path();
        let Some(content) = Self::read_optional(&path) else {
            return Vec::new();
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(tasks)) => tasks,
            Ok(other) => {
                warn!(
                    path = %path.display(),
                    kind = json_kind(&other),
                    "task list is not a JSON array, treating as empty"
                );
                Vec::new()
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt task list, treating as empty");
                Vec::new()
            },
        }
    }

    fn save_tasks(&self, tasks: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(tasks)?;
        self.write_atomic(&self.todos_path(), &json)
    }

    fn load_reset_marker(&self) -> Option<NaiveDate> {
        let path = self.marker_path();
        let raw = Self::read_optional(&path)?;
        let parsed = parse_marker(&raw);
        if parsed.is_none() {
            warn!(path = %path.display(), "unparsable reset marker, treating as absent");
        }
        parsed
    }

    fn save_reset_marker(&self, date: NaiveDate) -> Result<(), StoreError> {
        self.write_atomic(&self.marker_path(), format_marker(date).as_bytes())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
