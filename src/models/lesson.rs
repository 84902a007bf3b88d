use std::fmt;

use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Day of the week a lesson repeats on.
///
/// The schedule always iterates Monday first, so the week ordering lives
/// here rather than in the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in schedule order (Monday first).
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// A recurring lesson in the weekly schedule.
///
/// The id stays stable across edits; only the other fields change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub instructor: String,
    pub room: String,
    pub day: Weekday,
    pub time: NaiveTime,
}

impl Lesson {
    /// Create a lesson with a fresh id.
    pub fn new(
        title: impl Into<String>,
        instructor: impl Into<String>,
        room: impl Into<String>,
        day: Weekday,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            instructor: instructor.into(),
            room: room.into(),
            day,
            time,
        }
    }
}

/// Partial update applied to an existing lesson; `None` fields are kept.
#[derive(Debug, Clone, Default)]
pub struct LessonUpdate {
    pub title: Option<String>,
    pub instructor: Option<String>,
    pub room: Option<String>,
    pub day: Option<Weekday>,
    pub time: Option<NaiveTime>,
}

impl LessonUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.instructor.is_none()
            && self.room.is_none()
            && self.day.is_none()
            && self.time.is_none()
    }
}
