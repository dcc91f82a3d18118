/// Action for creating new habits

use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::storage::RecordStore;
use crate::TrackerError;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    pub category: String,
    /// Parsed into the Frequency enum; one of daily, weekly, monthly, custom
    pub frequency: String,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub habit_id: String,
    pub message: String,
}

/// Create a new habit and persist it
pub fn create_habit<S: RecordStore>(
    store: &S,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, TrackerError> {
    let frequency = params.frequency.parse()?;
    let habit = Habit::new(&params.name, &params.category, frequency)?;

    let habit_id = habit.id.to_string();
    let name = habit.name.clone();
    store.create_habit(habit)?;

    Ok(CreateHabitResponse {
        success: true,
        habit_id,
        message: format!("✅ Created habit '{}'. Ready to start a streak!", name),
    })
}
