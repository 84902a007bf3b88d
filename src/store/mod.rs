//! Durable storage for the planner's record collections.
//!
//! Every collection persists as a single named JSON blob with
//! whole-collection replace semantics: mutations load the entire sequence,
//! change it in memory, and write the entire sequence back. There are no
//! partial updates and no concurrency control; the contract assumes one
//! logical thread of control (last writer wins), which holds because the
//! CLI is a short-lived single-threaded process.
//!
//! Blob layout under the data directory:
//! - `lessons.json`: the weekly schedule
//! - `tasks.json`: the to-do list
//! - `sessionHistory.json`: recorded study sessions
//!
//! [`FsStore`] is the real backend (one file per key, atomic writes);
//! [`MemoryStore`] is the in-memory stand-in used by tests.

pub mod collection;
pub mod fs;
pub mod memory;

use anyhow::Result;
pub use collection::{
    LESSONS_KEY, SESSION_HISTORY_KEY, TASKS_KEY, load_records, save_records, try_load_records,
};
pub use fs::FsStore;
pub use memory::MemoryStore;

/// Capability over named blobs of bytes.
///
/// Keys are plain collection names (no path separators); the typed
/// load/save layer in [`collection`] sits on top of this trait, so tests
/// can swap the filesystem for [`MemoryStore`].
pub trait RecordStore {
    /// Read the blob stored under `key`, or `None` if nothing was ever
    /// stored there.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key` unconditionally.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
