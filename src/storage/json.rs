/// JSON file implementation of the record store
///
/// Habits and logs live in two pretty-printed JSON arrays, `habits.json`
/// and `logs.json`, under a single data directory. Every save rewrites the
/// whole file; record sets are small enough that read-modify-write beats
/// carrying a database around.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::domain::{Habit, LogEntry};
use crate::storage::{RecordStore, StorageError};

/// File-backed store holding the two record files
pub struct JsonStore {
    habits_path: PathBuf,
    logs_path: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StorageError> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)?;
        info!("Opened record store at: {}", dir.display());

        Ok(Self {
            habits_path: dir.join("habits.json"),
            logs_path: dir.join("logs.json"),
        })
    }

    /// Read a record file, treating anything unreadable as empty
    ///
    /// A missing file is the normal first-run state. A malformed one is
    /// logged and skipped so one bad file cannot brick the tracker.
    fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
        if !path.exists() {
            debug!("No record file at {}, starting empty", path.display());
            return Vec::new();
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                error!("Failed to read {}: {}", path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                error!("Malformed record file {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    /// Overwrite a record file with the full record set
    fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(path, raw)?;
        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn load_habits(&self) -> Vec<Habit> {
        Self::load_records(&self.habits_path)
    }

    fn load_logs(&self) -> Vec<LogEntry> {
        Self::load_records(&self.logs_path)
    }

    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        Self::save_records(&self.habits_path, habits)
    }

    fn save_logs(&self, logs: &[LogEntry]) -> Result<(), StorageError> {
        Self::save_records(&self.logs_path, logs)
    }
}
