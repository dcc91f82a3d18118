/// User-facing actions for habit management
///
/// This module contains the actions the CLI maps its subcommands onto.
/// Each action takes a parameter struct, works against a `RecordStore`,
/// and returns a typed response carrying a ready-to-print message.

pub mod backup;
pub mod create;
pub mod delete;
pub mod list;
pub mod log;
pub mod stats;
pub mod status;
pub mod update;

// Re-export action functions for easy access
pub use backup::*;
pub use create::*;
pub use delete::*;
pub use list::*;
pub use log::*;
pub use stats::*;
pub use status::*;
pub use update::*;

use crate::domain::{Habit, LogIndex};
use crate::storage::{RecordStore, StorageError};

/// Load both record sets and index the logs for the core functions
pub fn load_snapshot<S: RecordStore>(store: &S) -> (Vec<Habit>, LogIndex) {
    let habits = store.load_habits();
    let logs = store.load_logs();
    let index = LogIndex::from_entries(&logs);
    (habits, index)
}

/// Resolve a user-supplied habit reference to a stored habit
///
/// An exact name match wins; failing that, a unique id prefix. Duplicate
/// names and non-unique prefixes are reported as ambiguous rather than
/// guessed at.
pub fn resolve_habit<'a>(habits: &'a [Habit], selector: &str) -> Result<&'a Habit, StorageError> {
    if selector.trim().is_empty() {
        return Err(StorageError::HabitNotFound {
            habit: selector.to_string(),
        });
    }

    let named: Vec<&Habit> = habits.iter().filter(|h| h.name == selector).collect();
    match named.as_slice() {
        [one] => return Ok(one),
        [] => {}
        _ => {
            return Err(StorageError::AmbiguousHabit {
                selector: selector.to_string(),
            })
        }
    }

    let prefix = selector.to_lowercase();
    let matched: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.id.to_string().starts_with(&prefix))
        .collect();
    match matched.as_slice() {
        [one] => Ok(one),
        [] => Err(StorageError::HabitNotFound {
            habit: selector.to_string(),
        }),
        _ => Err(StorageError::AmbiguousHabit {
            selector: selector.to_string(),
        }),
    }
}
