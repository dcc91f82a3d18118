/// Combined export/import of both record sets
///
/// A backup is a single JSON document bundling habits, logs, and the time
/// it was taken. Import replaces whatever the store currently holds.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Habit, LogEntry};
use crate::storage::{RecordStore, StorageError};

/// The on-disk backup document
#[derive(Debug, Serialize, Deserialize)]
pub struct Backup {
    pub habits: Vec<Habit>,
    pub logs: Vec<LogEntry>,
    /// Local wall-clock time the export was taken, `YYYY-MM-DD HH:MM:SS`
    pub exported_at: String,
}

/// Default backup filename for a given day
pub fn default_filename(today: NaiveDate) -> String {
    format!("habit_tracker_export_{}.json", today.format("%Y%m%d"))
}

/// Write the store's full contents to a backup file
pub fn export<S: RecordStore>(store: &S, path: &Path) -> Result<Backup, StorageError> {
    let backup = Backup {
        habits: store.load_habits(),
        logs: store.load_logs(),
        exported_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    fs::write(path, serde_json::to_string_pretty(&backup)?)?;
    info!(
        "Exported {} habits and {} logs to {}",
        backup.habits.len(),
        backup.logs.len(),
        path.display()
    );

    Ok(backup)
}

/// Replace the store's contents with those of a backup file
///
/// Unlike ordinary loads, a missing or malformed backup file is an error:
/// the user explicitly named it and silently wiping records would be worse
/// than refusing.
pub fn import<S: RecordStore>(store: &S, path: &Path) -> Result<Backup, StorageError> {
    let raw = fs::read_to_string(path)?;
    let backup: Backup = serde_json::from_str(&raw)?;

    store.save_habits(&backup.habits)?;
    store.save_logs(&backup.logs)?;
    info!(
        "Imported {} habits and {} logs from {}",
        backup.habits.len(),
        backup.logs.len(),
        path.display()
    );

    Ok(backup)
}
