/// Action for editing existing habits
///
/// Applies name, category, or frequency changes to a habit resolved by
/// name or id prefix. Unset fields keep their current values.

use serde::{Deserialize, Serialize};

use crate::domain::Frequency;
use crate::storage::RecordStore;
use crate::tools::resolve_habit;
use crate::TrackerError;

/// Parameters for updating an existing habit
#[derive(Debug, Deserialize)]
pub struct UpdateHabitParams {
    /// Habit name or id prefix
    pub habit: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<String>,
}

/// Response from updating a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Update an existing habit and persist the changes
pub fn update_habit<S: RecordStore>(
    store: &S,
    params: UpdateHabitParams,
) -> Result<UpdateHabitResponse, TrackerError> {
    let habits = store.load_habits();
    let mut habit = resolve_habit(&habits, &params.habit)?.clone();

    let frequency = match params.frequency {
        Some(raw) => Some(raw.parse::<Frequency>()?),
        None => None,
    };

    habit.update(params.name, params.category, frequency)?;
    store.update_habit(&habit)?;

    Ok(UpdateHabitResponse {
        success: true,
        message: format!("✅ Updated habit '{}'", habit.name),
    })
}
