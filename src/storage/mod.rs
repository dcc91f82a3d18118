/// Storage layer for persisting habit data
///
/// This module handles persistence over two flat JSON files. It provides
/// a clean interface for storing and retrieving habits and completion logs.

pub mod backup;
pub mod json;

// Re-export the main storage types
pub use json::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Habit, HabitId, LogEntry};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Habit not found: {habit}")]
    HabitNotFound { habit: String },

    #[error("Habit reference '{selector}' matches more than one habit")]
    AmbiguousHabit { selector: String },
}

/// Trait defining the storage interface for habit records
///
/// This trait allows us to potentially swap out the JSON files for other
/// backends in the future while keeping the same interface. Loads are
/// total: a missing or unreadable record set comes back empty rather than
/// failing the caller.
pub trait RecordStore {
    /// Load every stored habit
    fn load_habits(&self) -> Vec<Habit>;

    /// Load every stored log entry
    fn load_logs(&self) -> Vec<LogEntry>;

    /// Replace the stored habit set
    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError>;

    /// Replace the stored log set
    fn save_logs(&self, logs: &[LogEntry]) -> Result<(), StorageError>;

    /// Add a new habit
    fn create_habit(&self, habit: Habit) -> Result<(), StorageError> {
        let mut habits = self.load_habits();
        habits.push(habit);
        self.save_habits(&habits)
    }

    /// Persist changes to an existing habit
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let mut habits = self.load_habits();
        let slot = habits
            .iter_mut()
            .find(|stored| stored.id == habit.id)
            .ok_or_else(|| StorageError::HabitNotFound {
                habit: habit.id.to_string(),
            })?;
        *slot = habit.clone();
        self.save_habits(&habits)
    }

    /// Remove a habit and every log entry referencing it
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError> {
        let mut habits = self.load_habits();
        let before = habits.len();
        habits.retain(|habit| habit.id != habit_id);
        if habits.len() == before {
            return Err(StorageError::HabitNotFound {
                habit: habit_id.to_string(),
            });
        }
        self.save_habits(&habits)?;

        let mut logs = self.load_logs();
        logs.retain(|log| log.habit_id != habit_id);
        self.save_logs(&logs)
    }

    /// Record a completion status for one (habit, date), replacing any
    /// earlier status for that same day
    fn upsert_log(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
        completed: bool,
    ) -> Result<(), StorageError> {
        let mut logs = self.load_logs();
        match logs
            .iter_mut()
            .find(|log| log.habit_id == habit_id && log.date == date)
        {
            Some(log) => log.completed = completed,
            None => logs.push(LogEntry::new(habit_id, date, completed)),
        }
        self.save_logs(&logs)
    }
}
