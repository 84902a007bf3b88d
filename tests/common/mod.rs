//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for seeding test data directories with collection blobs
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a raw collection blob under `<key>.json`
    pub fn with_blob(self, key: &str, content: &str) -> Self {
        let blob_path = self.temp_dir.path().join(format!("{key}.json"));
        fs::write(blob_path, content).expect("Failed to write blob");
        self
    }

    /// Seed the lesson collection with raw JSON
    pub fn with_lessons(self, content: &str) -> Self {
        self.with_blob("lessons", content)
    }

    /// Seed the task collection with raw JSON
    pub fn with_tasks(self, content: &str) -> Self {
        self.with_blob("tasks", content)
    }

    /// Seed the session history with raw JSON
    pub fn with_session_history(self, content: &str) -> Self {
        self.with_blob("sessionHistory", content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a stored collection blob back as a string
pub fn read_blob(dir: &Path, key: &str) -> String {
    fs::read_to_string(dir.join(format!("{key}.json"))).expect("Failed to read blob")
}

/// Helper to create a data directory seeded with records in every collection
pub fn seeded_data_dir() -> TempDir {
    DataDirBuilder::new()
        .with_lessons(
            r#"[
  {"id":"11111111-1111-1111-1111-111111111111","title":"Algebra","instructor":"Dr. Noether","room":"201","day":"Monday","time":"09:00:00"},
  {"id":"22222222-2222-2222-2222-222222222222","title":"Physics","instructor":"Dr. Curie","room":"105","day":"Wednesday","time":"11:30:00"}
]"#,
        )
        .with_tasks(
            r#"[
  {"id":"33333333-3333-3333-3333-333333333333","title":"Read chapter 4","isCompleted":false},
  {"id":"44444444-4444-4444-4444-444444444444","title":"Finish problem set","isCompleted":true}
]"#,
        )
        .with_session_history(
            r#"[
  {"id":"55555555-5555-5555-5555-555555555555","startTime":"2025-01-14T18:00:00Z","duration":1800},
  {"id":"66666666-6666-6666-6666-666666666666","startTime":"2025-01-15T08:00:00Z","duration":65}
]"#,
        )
        .build()
}
