/// Actions for exporting and importing backups

use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::storage::{backup, RecordStore};
use crate::TrackerError;

/// Parameters for exporting a backup
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Target file; defaults to `habit_tracker_export_YYYYMMDD.json`
    /// in the current directory
    pub path: Option<String>,
}

/// Response from exporting a backup
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub path: PathBuf,
    pub habits: usize,
    pub logs: usize,
    pub message: String,
}

/// Parameters for importing a backup
#[derive(Debug, Deserialize)]
pub struct ImportParams {
    pub path: String,
}

/// Response from importing a backup
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub habits: usize,
    pub logs: usize,
    pub message: String,
}

/// Write the full record set to a backup file
pub fn export_backup<S: RecordStore>(
    store: &S,
    params: ExportParams,
) -> Result<ExportResponse, TrackerError> {
    let path = match params.path {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(backup::default_filename(Local::now().date_naive())),
    };

    let written = backup::export(store, &path)?;

    Ok(ExportResponse {
        success: true,
        message: format!(
            "💾 Exported {} habit{} and {} log{} to {}",
            written.habits.len(),
            if written.habits.len() == 1 { "" } else { "s" },
            written.logs.len(),
            if written.logs.len() == 1 { "" } else { "s" },
            path.display()
        ),
        habits: written.habits.len(),
        logs: written.logs.len(),
        path,
    })
}

/// Replace the record set from a backup file
pub fn import_backup<S: RecordStore>(
    store: &S,
    params: ImportParams,
) -> Result<ImportResponse, TrackerError> {
    let path = PathBuf::from(params.path);
    let restored = backup::import(store, &path)?;

    Ok(ImportResponse {
        success: true,
        message: format!(
            "✅ Imported {} habit{} and {} log{} from {}",
            restored.habits.len(),
            if restored.habits.len() == 1 { "" } else { "s" },
            restored.logs.len(),
            if restored.logs.len() == 1 { "" } else { "s" },
            path.display()
        ),
        habits: restored.habits.len(),
        logs: restored.logs.len(),
    })
}
