/// Streak computation over the completion log
///
/// Pure functions deriving consecutive-day streak facts from a LogIndex
/// snapshot. Nothing in here touches the clock: callers pass today's date
/// in, which keeps every result reproducible under test.

use serde::Serialize;
use chrono::NaiveDate;

use crate::domain::{Habit, HabitId, LogIndex};

/// The single longest completion run across all habits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestStreak {
    /// Name of the habit holding the record; empty when no habit has a
    /// single completed entry
    pub habit: String,
    /// Length of the run in days
    pub days: u32,
}

/// Number of consecutive completed days ending at today or yesterday
///
/// Today not being checked in yet (no entry, or an entry still marked
/// incomplete) does not break an otherwise intact streak; it just
/// contributes nothing until marked complete. A missing or incomplete
/// entry on any earlier day ends the run there.
pub fn current_streak(index: &LogIndex, habit: HabitId, today: NaiveDate) -> u32 {
    let yesterday = today - chrono::Duration::days(1);

    // Walk from today when it is already done, from yesterday when only
    // today is still pending. Anything else means no live streak.
    let start = if index.completed(habit, today) {
        today
    } else if index.completed(habit, yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut day = start;
    while index.completed(habit, day) {
        streak += 1;
        day = day - chrono::Duration::days(1);
    }

    streak
}

/// Longest run of consecutive completed days any habit has ever achieved
///
/// Scans full history, not just runs still alive today. Ties go to the
/// habit appearing first in `habits`.
pub fn longest_streak(habits: &[Habit], index: &LogIndex) -> LongestStreak {
    let mut best = LongestStreak {
        habit: String::new(),
        days: 0,
    };

    for habit in habits {
        let mut run = 0u32;
        let mut habit_best = 0u32;
        let mut prev: Option<NaiveDate> = None;

        // days() yields ascending dates; only completed ones extend a run,
        // and any gap other than exactly one day starts a fresh run.
        for (date, completed) in index.days(habit.id) {
            if !completed {
                continue;
            }
            run = match prev {
                Some(prev_date) if (date - prev_date).num_days() == 1 => run + 1,
                _ => 1,
            };
            habit_best = habit_best.max(run);
            prev = Some(date);
        }

        if habit_best > best.days {
            best = LongestStreak {
                habit: habit.name.clone(),
                days: habit_best,
            };
        }
    }

    best
}

/// Habits with an established streak that have not been completed today
///
/// Only streaks of at least two days are worth protecting; habits below
/// that threshold have nothing to lose yet. Names come back in the order
/// the habits were given.
pub fn habits_needing_attention(
    habits: &[Habit],
    index: &LogIndex,
    today: NaiveDate,
) -> Vec<String> {
    habits
        .iter()
        .filter(|habit| {
            current_streak(index, habit.id, today) >= 2 && !index.completed(habit.id, today)
        })
        .map(|habit| habit.name.clone())
        .collect()
}
