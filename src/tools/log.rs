/// Action for logging habit completions
///
/// Records a completion (or an explicit miss) for one habit and day. A
/// second log for the same day replaces the first, so checking a habit
/// off and then unchecking it leaves a single row.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{current_streak, DomainError, LogIndex};
use crate::storage::RecordStore;
use crate::tools::resolve_habit;
use crate::TrackerError;

/// Parameters for logging a completion
#[derive(Debug, Deserialize)]
pub struct LogCompletionParams {
    /// Habit name or id prefix
    pub habit: String,
    /// `YYYY-MM-DD`; defaults to today
    pub date: Option<String>,
    pub completed: bool,
}

/// Response from logging a completion
#[derive(Debug, Serialize)]
pub struct LogCompletionResponse {
    pub success: bool,
    pub date: NaiveDate,
    pub current_streak: u32,
    pub message: String,
}

/// Record a completion status and report the habit's updated streak
pub fn log_completion<S: RecordStore>(
    store: &S,
    params: LogCompletionParams,
) -> Result<LogCompletionResponse, TrackerError> {
    let habits = store.load_habits();
    let habit = resolve_habit(&habits, &params.habit)?.clone();

    let today = Local::now().date_naive();
    let date = match params.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", raw))
        })?,
        None => today,
    };
    if date > today {
        return Err(DomainError::InvalidDate(format!("{} is in the future", date)).into());
    }

    store.upsert_log(habit.id, date, params.completed)?;

    let index = LogIndex::from_entries(&store.load_logs());
    let streak = current_streak(&index, habit.id, today);

    let message = if params.completed {
        format!(
            "🔥 Logged '{}' for {}. Current streak: {} day{}",
            habit.name,
            date,
            streak,
            if streak == 1 { "" } else { "s" }
        )
    } else {
        format!("Marked '{}' as missed for {}", habit.name, date)
    };

    Ok(LogCompletionResponse {
        success: true,
        date,
        current_streak: streak,
        message,
    })
}
