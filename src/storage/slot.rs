//! The named storage slot holding the serialized task list.
//!
//! Persistence is a single synchronous read or write of one JSON file in the
//! application data directory. The slot is rewritten wholesale after every
//! mutation; there are no partial updates and no transactions. The wire
//! format is a plain JSON array of task records with camelCase field names.

use crate::libs::data_storage::DataStorage;
use crate::libs::task::Task;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const SLOT_FILE_NAME: &str = "tasks.json";

/// The only recognized failure modes of the slot. A failed read degrades to
/// an empty list; a failed write leaves the mutation in memory only.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("failed to read storage slot: {0}")]
    Read(#[source] io::Error),
    #[error("failed to parse storage slot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write storage slot: {0}")]
    Write(#[source] io::Error),
}

pub struct Slot {
    path: PathBuf,
}

impl Slot {
    /// Opens the default slot in the application data directory.
    pub fn new() -> Result<Slot, io::Error> {
        let path = DataStorage::new().get_path(SLOT_FILE_NAME)?;
        Ok(Slot { path })
    }

    /// Opens a slot at an explicit location.
    pub fn at(path: PathBuf) -> Slot {
        Slot { path }
    }

    /// Reads the whole task list. A missing slot is an empty list, not an
    /// error.
    pub fn read(&self) -> Result<Vec<Task>, SlotError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(SlotError::Read)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Rewrites the slot with the full task list.
    pub fn write(&self, tasks: &[Task]) -> Result<(), SlotError> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json).map_err(SlotError::Write)?;
        Ok(())
    }
}
