use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A to-do entry. Created pending, toggled in place, removed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
}

impl Task {
    /// Create a pending task with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), title: title.into(), is_completed: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("read chapter 4");
        assert_eq!(task.title, "read chapter 4");
        assert!(!task.is_completed);
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task::new("solve problem set");
        let value = serde_json::to_value(&task).unwrap();

        // Stored blobs use the camelCase field name.
        assert_eq!(value["isCompleted"], false);
        assert_eq!(value["title"], "solve problem set");
        assert!(value.get("is_completed").is_none());

        let back: Task = serde_json::from_value(value).unwrap();
        assert_eq!(back, task);
    }
}
