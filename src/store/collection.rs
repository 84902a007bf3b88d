//! Typed load/save of record collections, and the empty-on-failure policy.
//!
//! # Error Handling Strategy
//!
//! Loads follow a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Missing blob**: a key that was never written loads as an empty
//!   collection with no output. First runs are not an error.
//! - **Corrupt blob / read failure**: [`load_records`] logs a warning to
//!   stderr and falls back to an empty collection, so one damaged file
//!   never makes the whole tool unusable. [`try_load_records`] is the
//!   strict variant that surfaces the error; the fallback is a deliberate,
//!   tested policy, not a hidden catch.
//! - **Saves propagate**: a failed write is a real failure (data would be
//!   lost) and is always returned to the caller via `anyhow::Result`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RecordStore;

/// Key for the weekly schedule blob.
pub const LESSONS_KEY: &str = "lessons";
/// Key for the to-do list blob.
pub const TASKS_KEY: &str = "tasks";
/// Key for the recorded study sessions blob.
pub const SESSION_HISTORY_KEY: &str = "sessionHistory";

/// Load the collection stored under `key`, surfacing decode/read errors.
///
/// A missing key is not an error; it loads as an empty collection.
pub fn try_load_records<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: RecordStore,
{
    let Some(bytes) = store.read(key)? else {
        return Ok(Vec::new());
    };
    serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to decode the '{key}' collection"))
}

/// Load the collection stored under `key`, falling back to empty on any
/// failure.
///
/// Decode and read failures are reported on stderr and swallowed; callers
/// always get a usable (possibly empty) collection.
pub fn load_records<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: RecordStore,
{
    match try_load_records(store, key) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Warning: {e:#}; starting with an empty '{key}' collection");
            Vec::new()
        }
    }
}

/// Serialize the whole collection and overwrite the blob under `key`.
pub fn save_records<T, S>(store: &S, key: &str, records: &[T]) -> Result<()>
where
    T: Serialize,
    S: RecordStore,
{
    let bytes = serde_json::to_vec_pretty(records)
        .with_context(|| format!("failed to encode the '{key}' collection"))?;
    store.write(key, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::store::MemoryStore;

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        let tasks: Vec<Task> = load_records(&store, TASKS_KEY);
        assert!(tasks.is_empty());

        // The strict variant agrees: missing is not an error.
        let tasks: Vec<Task> = try_load_records(&store, TASKS_KEY).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let store = MemoryStore::new();
        let tasks = vec![Task::new("first"), Task::new("second"), Task::new("third")];

        save_records(&store, TASKS_KEY, &tasks).unwrap();
        let loaded: Vec<Task> = load_records(&store, TASKS_KEY);
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let store = MemoryStore::new();
        store.insert_raw(TASKS_KEY, "{ this is not json");

        let tasks: Vec<Task> = load_records(&store, TASKS_KEY);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_corrupt_blob_errors_in_strict_mode() {
        let store = MemoryStore::new();
        store.insert_raw(TASKS_KEY, "[{\"wrong\": \"shape\"}]");

        let result: Result<Vec<Task>> = try_load_records(&store, TASKS_KEY);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("tasks"));
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let store = MemoryStore::new();
        save_records(&store, TASKS_KEY, &[Task::new("a"), Task::new("b")]).unwrap();
        save_records(&store, TASKS_KEY, &[Task::new("only")]).unwrap();

        let loaded: Vec<Task> = load_records(&store, TASKS_KEY);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "only");
    }
}
