//! Task record.
//!
//! A task is whatever JSON object the UI stores. Only `id`, `text` and
//! `completed` have meaning here; every other field is carried through
//! untouched, in its original position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the completion flag.
pub const COMPLETED_FIELD: &str = "completed";

/// A single to-do item backed by its raw JSON object.
///
/// # Examples
///
/// ```
/// use daily_todo::Task;
/// use serde_json::json;
///
/// let mut task = Task::from_value(json!({"id": 1, "text": "buy milk", "completed": true})).unwrap();
/// assert!(task.is_completed());
/// task.set_completed(false);
/// assert_eq!(task.into_value(), json!({"id": 1, "text": "buy milk", "completed": false}));
///
/// assert!(Task::from_value(json!("not a task")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(Map<String, Value>);

impl Task {
    /// Wraps a JSON value, accepting only objects.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Stable identifier, whatever JSON type the UI chose for it.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn text(&self) -> Option<&str> {
        self.0.get("text").and_then(Value::as_str)
    }

    /// `true` only when the flag is present and the boolean `true`.
    pub fn is_completed(&self) -> bool {
        self.0
            .get(COMPLETED_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Sets the flag, keeping its position when already present.
    pub fn set_completed(&mut self, completed: bool) {
        self.0
            .insert(COMPLETED_FIELD.to_string(), Value::Bool(completed));
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
