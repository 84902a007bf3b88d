//! Studybook - Plan lessons, track tasks, and time study sessions
//!
//! This library backs the `studybook` command line tool. The pieces:
//!
//! - A weekly lesson schedule, a to-do list, and a study session history,
//!   each persisted as one JSON collection in a local data directory
//! - A stopwatch-style session timer that recomputes elapsed time from its
//!   start instant instead of counting ticks
//! - An interactive terminal study screen driving the timer
//!
//! # Example
//!
//! ```
//! use studybook::planner::Planner;
//! use studybook::store::MemoryStore;
//!
//! let planner = Planner::new(MemoryStore::new());
//! let task = planner.add_task("Review chapter 4")?;
//! assert!(!task.is_completed);
//!
//! planner.toggle_task(&task.id.to_string())?;
//! assert!(planner.tasks()[0].is_completed);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod planner;
pub mod store;
pub mod timer;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use models::{Lesson, StudySession, Task, Weekday};
pub use planner::Planner;
pub use store::{FsStore, MemoryStore, RecordStore};
pub use timer::{StudyTimer, TimerState};
