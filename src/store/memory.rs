//! In-memory record store used as a test double.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use super::RecordStore;

/// Keeps blobs in a `HashMap`; nothing touches the filesystem.
///
/// Interior mutability keeps the [`RecordStore`] methods `&self` like the
/// filesystem backend. The store is single-threaded by contract, so a
/// `RefCell` is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw blob, bypassing serialization. Tests use this to plant
    /// corrupt data.
    pub fn insert_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.blobs.borrow_mut().insert(key.to_string(), bytes.into());
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.blobs.borrow_mut().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
