//! In-memory store.
//!
//! Holds the task list and marker behind a [`parking_lot::RwLock`]. Nothing
//! survives the process; useful for tests and for embedding the server
//! without touching disk.

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde_json::Value;

use super::TodoStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct State {
    tasks: Vec<Value>,
    marker: Option<NaiveDate>,
}

/// Process-local [`TodoStore`].
///
/// # Examples
///
/// ```
/// use daily_todo::{InMemoryStore, TodoStore};
/// use serde_json::json;
///
/// let store = InMemoryStore::new();
/// store.save_tasks(&[json!({"id": 1, "text": "x", "completed": false})]).unwrap();
/// assert_eq!(store.load_tasks().len(), 1);
/// assert!(store.load_reset_marker().is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with tasks and a marker.
    pub fn with_state(tasks: Vec<Value>, marker: Option<NaiveDate>) -> Self {
        Self {
            state: RwLock::new(State { tasks, marker }),
        }
    }
}

impl TodoStore for InMemoryStore {
    fn load_tasks(&self) -> Vec<Value> {
        self.state.read().tasks.clone()
    }

    fn save_tasks(&self, tasks: &[Value]) -> Result<(), StoreError> {
        self.state.write().tasks = tasks.to_vec();
        Ok(())
    }

    fn load_reset_marker(&self) -> Option<NaiveDate> {
        self.state.read().marker
    }

    fn save_reset_marker(&self, date: NaiveDate) -> Result<(), StoreError> {
        self.state.write().marker = Some(date);
        Ok(())
    }
}
