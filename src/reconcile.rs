//! Daily reset of completed flags.
//!
//! On startup (and, if configured, before each read) the server compares
//! today's local date with the stored reset marker. When they differ, or no
//! marker exists, every task gets `completed = false`, entries that are not
//! JSON objects are dropped, and the marker moves to today.

use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::task::Task;

/// What a reconcile run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Marker already matched today; nothing was written.
    UpToDate,
    /// Completed flags were cleared and the marker advanced.
    Reset {
        /// Tasks written back.
        retained: usize,
        /// Entries discarded because they were not task objects.
        dropped: usize,
    },
}

/// The server's current local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Clears completed flags if the last reset was not on `today`.
///
/// Running this twice with the same date writes nothing the second time.
/// Tasks are saved before the marker, so an interrupted run is simply
/// repeated on the next start.
///
/// # Errors
///
/// Returns the store's error if either write fails. Callers at startup
/// should treat that as fatal.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daily_todo::{reconcile, InMemoryStore, ReconcileOutcome, TodoStore};
/// use serde_json::json;
///
/// let store = InMemoryStore::with_state(
///     vec![json!({"id": 1, "text": "buy milk", "completed": true})],
///     NaiveDate::from_ymd_opt(2024, 1, 1),
/// );
/// let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
///
/// let outcome = reconcile(&store, today).unwrap();
/// assert_eq!(outcome, ReconcileOutcome::Reset { retained: 1, dropped: 0 });
/// assert_eq!(store.load_tasks(), vec![json!({"id": 1, "text": "buy milk", "completed": false})]);
/// assert_eq!(reconcile(&store, today).unwrap(), ReconcileOutcome::UpToDate);
/// ```
pub fn reconcile(store: &dyn TodoStore, today: NaiveDate) -> Result<ReconcileOutcome, StoreError> {
    let marker = store.load_reset_marker();
    if marker == Some(today) {
        return Ok(ReconcileOutcome::UpToDate);
    }

    let stored = store.load_tasks();
    let total = stored.len();
    let reset: Vec<Value> = stored
        .into_iter()
        .filter_map(Task::from_value)
        .map(|mut task| {
            task.set_completed(false);
            task.into_value()
        })
        .collect();
    let dropped = total - reset.len();
    if dropped > 0 {
        warn!(dropped, "discarded task list entries that are not objects");
    }

    store.save_tasks(&reset)?;
    store.save_reset_marker(today)?;

    info!(
        previous = ?marker,
        today = %today,
        tasks = reset.len(),
        "daily reset applied"
    );
    Ok(ReconcileOutcome::Reset {
        retained: reset.len(),
        dropped,
    })
}
