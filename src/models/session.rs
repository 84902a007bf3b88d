use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed interval of study time.
///
/// Sessions are emitted by the study timer when it ends and are never
/// mutated afterwards; history only appends and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration")]
    pub duration_secs: u64,
}

impl StudySession {
    pub fn new(start_time: DateTime<Utc>, duration_secs: u64) -> Self {
        Self { id: Uuid::new_v4(), start_time, duration_secs }
    }
}
