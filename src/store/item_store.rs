//! JSON-file backed item store
//!
//! Atomicity of writes is achieved via:
//! 1. Write the whole collection to a sibling temp file
//! 2. fsync the temp file
//! 3. Rename temp over the data file (atomic on POSIX)
//!
//! Appends hold the writer lock for the full read-modify-write cycle.
//! Readers take no lock; they observe either the old or the new file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::id::IdGenerator;
use crate::item::{Item, ItemId, NewItem};

/// Item collection persisted as a single JSON array.
#[derive(Debug)]
pub struct ItemStore {
    path: PathBuf,
    temp_path: PathBuf,
    writer: Mutex<IdGenerator>,
}

impl ItemStore {
    /// Create a store over the given data file. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut temp_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "items.json".into());
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        Self {
            path,
            temp_path,
            writer: Mutex::new(IdGenerator::new()),
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file holding an empty collection if it is missing.
    ///
    /// Returns `true` when the file was created, `false` when it already
    /// existed and was left untouched.
    pub fn init(&self) -> StoreResult<bool> {
        let _guard = self.writer.lock().map_err(|_| StoreError::LockPoisoned)?;

        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::WriteFailed(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.persist(&[])?;
        info!(path = %self.path.display(), "created empty item collection");
        Ok(true)
    }

    /// Read and parse the entire collection.
    pub fn load(&self) -> StoreResult<Vec<Item>> {
        let raw = fs::read(&self.path)
            .map_err(|e| StoreError::ReadFailed(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_slice(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Look up an item by id.
    pub fn find(&self, id: ItemId) -> StoreResult<Option<Item>> {
        Ok(self.load()?.into_iter().find(|item| item.id == id))
    }

    /// Assign an id to `new_item`, append it and persist the collection.
    ///
    /// Atomic with respect to other `append` calls on this store.
    pub fn append(&self, new_item: NewItem) -> StoreResult<Item> {
        let mut ids = self.writer.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut items = self.load()?;
        let max_existing = items.iter().map(|item| item.id).max();
        let item = new_item.into_item(ids.next(max_existing));

        items.push(item.clone());
        self.persist(&items)?;

        debug!(id = item.id, total = items.len(), "appended item");
        Ok(item)
    }

    /// Current modification time of the data file.
    pub fn modified(&self) -> StoreResult<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|e| StoreError::ReadFailed(format!("{}: {}", self.path.display(), e)))
    }

    /// Replace the data file with `items`. Caller holds the writer lock.
    fn persist(&self, items: &[Item]) -> StoreResult<()> {
        let content = serde_json::to_vec_pretty(items)
            .map_err(|e| StoreError::WriteFailed(format!("serialize: {}", e)))?;

        let write_err =
            |e: std::io::Error| StoreError::WriteFailed(format!("{}: {}", self.temp_path.display(), e));

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)
            .map_err(write_err)?;
        file.write_all(&content).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        drop(file);

        fs::rename(&self.temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&self.temp_path);
            StoreError::WriteFailed(format!("{}: {}", self.path.display(), e))
        })
    }
}
