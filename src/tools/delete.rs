/// Action for removing habits
///
/// Removal cascades: every log entry for the habit goes with it.

use serde::{Deserialize, Serialize};

use crate::storage::RecordStore;
use crate::tools::resolve_habit;
use crate::TrackerError;

/// Parameters for removing a habit
#[derive(Debug, Deserialize)]
pub struct DeleteHabitParams {
    /// Habit name or id prefix
    pub habit: String,
}

/// Response from removing a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub success: bool,
    pub removed_logs: usize,
    pub message: String,
}

/// Remove a habit and all of its history
pub fn delete_habit<S: RecordStore>(
    store: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, TrackerError> {
    let habits = store.load_habits();
    let habit = resolve_habit(&habits, &params.habit)?.clone();

    let removed_logs = store
        .load_logs()
        .iter()
        .filter(|log| log.habit_id == habit.id)
        .count();
    store.delete_habit(habit.id)?;

    Ok(DeleteHabitResponse {
        success: true,
        removed_logs,
        message: format!(
            "🗑️ Removed habit '{}' and {} log entr{}",
            habit.name,
            removed_logs,
            if removed_logs == 1 { "y" } else { "ies" }
        ),
    })
}
