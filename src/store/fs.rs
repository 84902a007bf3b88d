//! Filesystem-backed record store: one JSON file per key, atomic writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::RecordStore;

/// Stores each keyed blob as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `dir`, creating the directory if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl RecordStore for FsStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read blob file {}", path.display()))
            }
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        // Write to a temp file and rename so readers never observe a
        // half-written blob.
        let path = self.blob_path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&temp, bytes)
            .with_context(|| format!("failed to write temp blob file {}", temp.display()))?;
        fs::rename(&temp, &path)
            .with_context(|| format!("failed to replace blob file {}", path.display()))?;
        Ok(())
    }
}
