/// Completion log records and the per-snapshot lookup index
///
/// This module defines the LogEntry record that pairs a habit with one
/// calendar day, and the LogIndex the pure computation layers walk.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::domain::HabitId;

/// One day's completion record for one habit
///
/// At most one entry exists per (habit_id, date) pair; the storage layer
/// updates in place when a day is toggled again. A date with no entry is
/// "not logged", which is not the same thing as `completed = false`:
/// streak continuation treats them differently, rate calculations count
/// both as non-completions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Which habit this entry belongs to
    pub habit_id: HabitId,
    /// Which calendar day it records
    pub date: NaiveDate,
    /// Whether the habit was done that day
    pub completed: bool,
}

impl LogEntry {
    /// Build an entry for one habit and day
    pub fn new(habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id,
            date,
            completed,
        }
    }
}

/// Snapshot index over log entries, keyed by (habit, date)
///
/// The streak engine walks backward one day at a time; doing that against
/// the flat entry list would rescan it for every day. Building this map
/// once per snapshot makes each day lookup cheap and hands the
/// longest-streak scan each habit's dates already in ascending order.
///
/// The index never mutates the entries it was built from.
#[derive(Debug, Default)]
pub struct LogIndex {
    by_habit: HashMap<HabitId, BTreeMap<NaiveDate, bool>>,
}

impl LogIndex {
    /// Build the index from a snapshot of log entries
    ///
    /// Should the input ever violate the one-entry-per-(habit, date)
    /// invariant, the last entry wins, mirroring the storage upsert.
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut by_habit: HashMap<HabitId, BTreeMap<NaiveDate, bool>> = HashMap::new();

        for entry in entries {
            by_habit
                .entry(entry.habit_id)
                .or_default()
                .insert(entry.date, entry.completed);
        }

        Self { by_habit }
    }

    /// Completion status for a habit on a date
    ///
    /// `None` means the day was never logged; `Some(false)` means it was
    /// explicitly marked incomplete.
    pub fn status(&self, habit: HabitId, date: NaiveDate) -> Option<bool> {
        self.by_habit.get(&habit)?.get(&date).copied()
    }

    /// Whether the habit has a completed entry on the date
    pub fn completed(&self, habit: HabitId, date: NaiveDate) -> bool {
        self.status(habit, date) == Some(true)
    }

    /// All logged days for a habit, ascending by date
    pub fn days(&self, habit: HabitId) -> impl Iterator<Item = (NaiveDate, bool)> + '_ {
        self.by_habit
            .get(&habit)
            .into_iter()
            .flat_map(|days| days.iter().map(|(&date, &completed)| (date, completed)))
    }

    /// Every indexed (habit, date, completed) triple, in no particular
    /// habit order
    pub fn entries(&self) -> impl Iterator<Item = (HabitId, NaiveDate, bool)> + '_ {
        self.by_habit.iter().flat_map(|(&habit, days)| {
            days.iter()
                .map(move |(&date, &completed)| (habit, date, completed))
        })
    }

    /// Number of logged days for a habit
    pub fn logged_days(&self, habit: HabitId) -> usize {
        self.by_habit.get(&habit).map_or(0, BTreeMap::len)
    }

    /// Number of completed days for a habit
    pub fn completed_days(&self, habit: HabitId) -> usize {
        self.by_habit
            .get(&habit)
            .map_or(0, |days| days.values().filter(|&&completed| completed).count())
    }

    /// True when the snapshot contained no entries at all
    pub fn is_empty(&self) -> bool {
        self.by_habit.is_empty()
    }
}
