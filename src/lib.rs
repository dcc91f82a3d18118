/// Public library interface for the habit tracker
///
/// This module exports the tracker facade and the public types that other
/// applications or tests can use directly.

use std::path::Path;

use thiserror::Error;

// Internal modules
pub mod analytics;
pub mod domain;
pub mod storage;
pub mod tools;

// Re-export the most commonly used types
pub use domain::*;
pub use storage::{JsonStore, RecordStore, StorageError};

/// Errors that can occur while running tracker actions
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),
}

/// Habit tracker over a JSON file store
///
/// Thin facade bundling the record store with the snapshot loading the
/// read-side actions need. The CLI owns one of these per invocation.
pub struct HabitTracker {
    store: JsonStore,
}

impl HabitTracker {
    /// Open a tracker rooted at the given data directory
    ///
    /// Creates the directory on first use; existing record files are
    /// picked up as they are.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, TrackerError> {
        let store = JsonStore::open(data_dir)?;
        Ok(Self { store })
    }

    /// The underlying record store
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Load the current records and index the logs for the core functions
    pub fn snapshot(&self) -> (Vec<Habit>, LogIndex) {
        tools::load_snapshot(&self.store)
    }
}
