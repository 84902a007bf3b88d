//! Domain operations over the stored collections.
//!
//! [`Planner`] wraps a [`RecordStore`] and exposes the lesson schedule, the
//! to-do list, and the session history as whole collections. Every mutation
//! loads the full collection, applies the change in memory, and saves the
//! full collection back; there is no partial update. With a single process
//! owning the store this keeps each blob internally consistent without any
//! locking.
//!
//! Reads are infallible: a missing or unreadable collection reads as empty
//! (see [`crate::store::load_records`]), so accessors return plain vectors
//! while mutations return `Result` for validation and save failures.
//!
//! Records are addressed by UUID. Operations accept either a full id or an
//! unambiguous prefix, so interactive callers can use the short form shown
//! in listings.

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;
use uuid::Uuid;

use crate::models::{Lesson, LessonUpdate, StudySession, Task, Weekday};
use crate::store::{
    LESSONS_KEY, RecordStore, SESSION_HISTORY_KEY, TASKS_KEY, load_records, save_records,
};

pub struct Planner<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Planner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Lessons ---

    /// All lessons in stored order.
    pub fn lessons(&self) -> Vec<Lesson> {
        load_records(&self.store, LESSONS_KEY)
    }

    pub fn add_lesson(
        &self,
        title: &str,
        instructor: &str,
        room: &str,
        day: Weekday,
        time: NaiveTime,
    ) -> Result<Lesson> {
        let title = title.trim();
        if title.is_empty() {
            bail!("lesson title cannot be empty");
        }

        let lesson = Lesson::new(title, instructor.trim(), room.trim(), day, time);
        let mut lessons = self.lessons();
        lessons.push(lesson.clone());
        save_records(&self.store, LESSONS_KEY, &lessons)?;
        Ok(lesson)
    }

    /// Apply the set fields of `update` to the matching lesson.
    ///
    /// The lesson keeps its identity, moving it to another day or time never
    /// mints a new id.
    pub fn edit_lesson(&self, id: &str, update: LessonUpdate) -> Result<Lesson> {
        if update.is_empty() {
            bail!("nothing to change");
        }
        if let Some(title) = &update.title
            && title.trim().is_empty()
        {
            bail!("lesson title cannot be empty");
        }

        let mut lessons = self.lessons();
        let index = resolve_id(&lessons, |lesson| lesson.id, "lesson", id)?;

        let lesson = &mut lessons[index];
        if let Some(title) = update.title {
            lesson.title = title.trim().to_string();
        }
        if let Some(instructor) = update.instructor {
            lesson.instructor = instructor.trim().to_string();
        }
        if let Some(room) = update.room {
            lesson.room = room.trim().to_string();
        }
        if let Some(day) = update.day {
            lesson.day = day;
        }
        if let Some(time) = update.time {
            lesson.time = time;
        }

        let edited = lesson.clone();
        save_records(&self.store, LESSONS_KEY, &lessons)?;
        Ok(edited)
    }

    pub fn remove_lesson(&self, id: &str) -> Result<Lesson> {
        let mut lessons = self.lessons();
        let index = resolve_id(&lessons, |lesson| lesson.id, "lesson", id)?;
        let removed = lessons.remove(index);
        save_records(&self.store, LESSONS_KEY, &lessons)?;
        Ok(removed)
    }

    /// Lessons on `day`, ordered by start time.
    pub fn lessons_on(&self, day: Weekday) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> =
            self.lessons().into_iter().filter(|lesson| lesson.day == day).collect();
        lessons.sort_by_key(|lesson| lesson.time);
        lessons
    }

    /// The full week Monday through Sunday, days without lessons skipped.
    ///
    /// Within a day lessons are ordered by start time; lessons sharing a
    /// start time keep their stored order.
    pub fn week_schedule(&self) -> Vec<(Weekday, Vec<Lesson>)> {
        let lessons = self.lessons();
        let mut week = Vec::new();
        for day in Weekday::ALL {
            let mut on_day: Vec<Lesson> =
                lessons.iter().filter(|lesson| lesson.day == day).cloned().collect();
            if on_day.is_empty() {
                continue;
            }
            on_day.sort_by_key(|lesson| lesson.time);
            week.push((day, on_day));
        }
        week
    }

    // --- Tasks ---

    /// All tasks in stored order.
    pub fn tasks(&self) -> Vec<Task> {
        load_records(&self.store, TASKS_KEY)
    }

    pub fn add_task(&self, title: &str) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            bail!("task title cannot be empty");
        }

        let task = Task::new(title);
        let mut tasks = self.tasks();
        tasks.push(task.clone());
        save_records(&self.store, TASKS_KEY, &tasks)?;
        Ok(task)
    }

    /// Flip completion of the matching task, leaving every other task as is.
    pub fn toggle_task(&self, id: &str) -> Result<Task> {
        let mut tasks = self.tasks();
        let index = resolve_id(&tasks, |task| task.id, "task", id)?;
        tasks[index].is_completed = !tasks[index].is_completed;
        let toggled = tasks[index].clone();
        save_records(&self.store, TASKS_KEY, &tasks)?;
        Ok(toggled)
    }

    pub fn remove_task(&self, id: &str) -> Result<Task> {
        let mut tasks = self.tasks();
        let index = resolve_id(&tasks, |task| task.id, "task", id)?;
        let removed = tasks.remove(index);
        save_records(&self.store, TASKS_KEY, &tasks)?;
        Ok(removed)
    }

    // --- Session history ---

    /// All recorded sessions in stored order, oldest first.
    pub fn sessions(&self) -> Vec<StudySession> {
        load_records(&self.store, SESSION_HISTORY_KEY)
    }

    pub fn record_session(&self, session: &StudySession) -> Result<()> {
        let mut sessions = self.sessions();
        sessions.push(session.clone());
        save_records(&self.store, SESSION_HISTORY_KEY, &sessions)
            .context("failed to record the study session")
    }

    pub fn remove_session(&self, id: &str) -> Result<StudySession> {
        let mut sessions = self.sessions();
        let index = resolve_id(&sessions, |session| session.id, "session", id)?;
        let removed = sessions.remove(index);
        save_records(&self.store, SESSION_HISTORY_KEY, &sessions)?;
        Ok(removed)
    }

    /// Drop the whole history, returning how many sessions were removed.
    pub fn clear_sessions(&self) -> Result<usize> {
        let count = self.sessions().len();
        save_records::<StudySession, S>(&self.store, SESSION_HISTORY_KEY, &[])?;
        Ok(count)
    }
}

/// Find the single record whose id matches `id` exactly or by prefix.
fn resolve_id<T>(items: &[T], id_of: impl Fn(&T) -> Uuid, what: &str, id: &str) -> Result<usize> {
    let needle = id.trim().to_lowercase();
    if needle.is_empty() {
        bail!("no {what} id provided");
    }

    let matches: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| id_of(item).to_string().starts_with(&needle))
        .map(|(index, _)| index)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => bail!("no {what} matches id '{id}'"),
        _ => bail!("id '{id}' is ambiguous, it matches {} {what}s", matches.len()),
    }
}
