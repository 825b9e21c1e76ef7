//! Property-based tests for the store contract and the daily reset.
//!
//! - Saved task lists read back identically, including field order and
//!   unknown fields
//! - A reset leaves every retained task uncompleted and the marker on today
//! - A second reset on the same day changes nothing

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::{Map, Value};

use daily_todo::{reconcile, FileStore, InMemoryStore, ReconcileOutcome, Task, TodoStore};

// ─── Arbitrary Strategies ───────────────────────────────────────────────────

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ]
}

/// Task object with the known fields plus arbitrary extras, in shuffled order.
fn arb_task() -> impl Strategy<Value = Value> {
    (
        prop_oneof![any::<u32>().prop_map(Value::from), "[a-f0-9]{8}".prop_map(Value::String)],
        "[a-zA-Z0-9 ]{0,40}",
        any::<bool>(),
        prop::collection::vec(("x_[a-z]{1,8}", arb_scalar()), 0..4),
    )
        .prop_map(|(id, text, completed, extras)| {
            let mut map = Map::new();
            for (key, value) in extras {
                map.insert(key, value);
            }
            map.insert("id".to_string(), id);
            map.insert("text".to_string(), Value::String(text));
            map.insert("completed".to_string(), Value::Bool(completed));
            Value::Object(map)
        })
}

/// Stored entries: mostly tasks, occasionally junk that is not an object.
fn arb_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => arb_task(),
        1 => arb_scalar(),
    ]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ─── Store Round-trip ───────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// What goes into the file store comes back byte-for-byte as JSON.
    #[test]
    fn file_store_preserves_task_lists(tasks in prop::collection::vec(arb_task(), 0..8)) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        store.save_tasks(&tasks).unwrap();
        let loaded = store.load_tasks();

        prop_assert_eq!(
            serde_json::to_string(&loaded).unwrap(),
            serde_json::to_string(&tasks).unwrap()
        );
    }
}

// ─── Reset Invariants ───────────────────────────────────────────────────────

proptest! {
    /// After a reset: marker is today, every retained task is uncompleted,
    /// and exactly the object entries survive, in order.
    #[test]
    fn reset_postconditions(
        entries in prop::collection::vec(arb_entry(), 0..10),
        marker in proptest::option::of(arb_date()),
        today in arb_date(),
    ) {
        prop_assume!(marker != Some(today));
        let store = InMemoryStore::with_state(entries.clone(), marker);

        let outcome = reconcile(&store, today).unwrap();

        let objects: Vec<&Value> = entries.iter().filter(|e| e.is_object()).collect();
        let stored = store.load_tasks();
        prop_assert_eq!(
            outcome,
            ReconcileOutcome::Reset {
                retained: objects.len(),
                dropped: entries.len() - objects.len(),
            }
        );
        prop_assert_eq!(store.load_reset_marker(), Some(today));
        prop_assert_eq!(stored.len(), objects.len());
        for (after, before) in stored.iter().zip(objects) {
            let task = Task::from_value(after.clone()).unwrap();
            prop_assert!(!task.is_completed());
            let before = Task::from_value(before.clone()).unwrap();
            prop_assert_eq!(task.id(), before.id());
            prop_assert_eq!(task.text(), before.text());
        }
    }

    /// Reconciling twice with the same date stores the same state as once.
    #[test]
    fn reconcile_is_idempotent(
        entries in prop::collection::vec(arb_entry(), 0..10),
        marker in proptest::option::of(arb_date()),
        today in arb_date(),
    ) {
        let store = InMemoryStore::with_state(entries, marker);

        reconcile(&store, today).unwrap();
        let tasks_once = store.load_tasks();
        let second = reconcile(&store, today).unwrap();

        prop_assert_eq!(second, ReconcileOutcome::UpToDate);
        prop_assert_eq!(store.load_tasks(), tasks_once);
        prop_assert_eq!(store.load_reset_marker(), Some(today));
    }

    /// A matching marker means nothing is rewritten, completed flags included.
    #[test]
    fn same_day_keeps_everything(
        entries in prop::collection::vec(arb_entry(), 0..10),
        today in arb_date(),
    ) {
        let store = InMemoryStore::with_state(entries.clone(), Some(today));

        prop_assert_eq!(reconcile(&store, today).unwrap(), ReconcileOutcome::UpToDate);
        prop_assert_eq!(store.load_tasks(), entries);
    }
}

// ─── Fuzz: arbitrary file contents ──────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever bytes sit in the storage files, reads never panic and
    /// corrupt content degrades to empty / absent.
    #[test]
    fn arbitrary_file_contents_never_panic(
        todos in prop::collection::vec(any::<u8>(), 0..200),
        marker in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        std::fs::create_dir_all(store.data_dir()).unwrap();
        std::fs::write(store.todos_path(), &todos).unwrap();
        std::fs::write(store.marker_path(), &marker).unwrap();

        let tasks = store.load_tasks();
        if serde_json::from_slice::<Vec<Value>>(&todos).is_err() {
            prop_assert!(tasks.is_empty());
        }

        let expected = std::str::from_utf8(&marker)
            .ok()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok());
        prop_assert_eq!(store.load_reset_marker(), expected);
    }

    /// Anything that is not a trimmed `YYYY-MM-DD` date reads as no marker.
    #[test]
    fn non_date_markers_read_as_absent(raw in "[a-zA-Z /:.]{0,16}") {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        std::fs::create_dir_all(store.data_dir()).unwrap();
        std::fs::write(store.marker_path(), &raw).unwrap();

        prop_assert_eq!(store.load_reset_marker(), None);
    }
}
