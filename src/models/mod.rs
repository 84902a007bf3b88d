//! Record types persisted by the planner.
//!
//! This module defines the data structures stored in the record store:
//!
//! - [`Lesson`] - a recurring entry in the weekly schedule
//! - [`Task`] - a to-do item with a completion flag
//! - [`StudySession`] - one completed interval of study time
//! - [`Weekday`] - the fixed Monday-first week the schedule iterates
//!
//! All three record types serialize with serde to the stored JSON layout
//! (`isCompleted`, `startTime`, `duration` field names), so the blobs on
//! disk read exactly like the collections they hold.

pub mod lesson;
pub mod session;
pub mod task;

pub use lesson::{Lesson, LessonUpdate, Weekday};
pub use session::StudySession;
pub use task::Task;
