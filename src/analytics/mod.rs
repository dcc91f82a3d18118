/// Completion analytics over the habit log
///
/// Aggregations the reporting commands draw from: completion percentages,
/// a day-by-day trend with a trailing moving average, and calendar-style
/// completion series. Everything here is a pure function over a LogIndex
/// snapshot, same contract as the streak engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{current_streak, Habit, HabitId, LogIndex};

/// Completion percentage summary for one habit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionStat {
    pub habit: String,
    /// Percent of logged days marked complete, 0.0 to 100.0
    pub rate: f64,
    pub completed: u32,
    pub logged: u32,
}

/// One day of the completion trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Raw completion rate for the day, pooled across habits
    pub rate: f64,
    /// Trailing moving average of `rate`
    pub smoothed: f64,
}

/// Pooled completion percentage for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCompletion {
    pub date: NaiveDate,
    pub pct: f64,
}

/// Today's check-in tally across all habits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodayProgress {
    pub completed: u32,
    pub total: u32,
}

/// A habit's live streak, for the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakStat {
    pub habit: String,
    pub days: u32,
}

/// One day of a habit's recent activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    /// `None` when the day was never logged
    pub status: Option<bool>,
}

/// Percent of a habit's logged days marked complete
///
/// `None` when the habit has no logged days at all, so callers can keep
/// never-logged habits out of averages instead of counting them as 0%.
pub fn completion_rate(index: &LogIndex, habit: HabitId) -> Option<f64> {
    let logged = index.logged_days(habit);
    if logged == 0 {
        return None;
    }
    Some(index.completed_days(habit) as f64 / logged as f64 * 100.0)
}

/// Completion summaries for every habit with at least one logged day
///
/// Sorted by rate descending; ties keep input order.
pub fn completion_rates(habits: &[Habit], index: &LogIndex) -> Vec<CompletionStat> {
    let mut stats: Vec<CompletionStat> = habits
        .iter()
        .filter_map(|habit| {
            completion_rate(index, habit.id).map(|rate| CompletionStat {
                habit: habit.name.clone(),
                rate,
                completed: index.completed_days(habit.id) as u32,
                logged: index.logged_days(habit.id) as u32,
            })
        })
        .collect();

    stats.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    stats
}

/// Day-by-day completion rate over a date range, with a smoothed series
///
/// One point per day from `start` through `end`. A day's rate pools every
/// habit logged that day; days with no logs count as 0. The smoothed value
/// is a trailing mean over a window of `min(7, range length)` days, using
/// whatever shorter prefix exists near the start of the range.
///
/// An empty log or an inverted range produces an empty series.
pub fn daily_completion_trend(
    index: &LogIndex,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TrendPoint> {
    if index.is_empty() || start > end {
        return Vec::new();
    }

    let by_day = counts_by_day(index, start, end);

    let mut rates = Vec::new();
    let mut day = start;
    while day <= end {
        rates.push((day, day_rate(by_day.get(&day))));
        day = day + chrono::Duration::days(1);
    }

    let window = rates.len().min(7);
    rates
        .iter()
        .enumerate()
        .map(|(i, &(date, rate))| {
            let from = (i + 1).saturating_sub(window);
            let slice = &rates[from..=i];
            let smoothed = slice.iter().map(|&(_, r)| r).sum::<f64>() / slice.len() as f64;
            TrendPoint {
                date,
                rate,
                smoothed,
            }
        })
        .collect()
}

// Pool per-day (completed, logged) entry counts across habits.
fn counts_by_day(
    index: &LogIndex,
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<NaiveDate, (u32, u32)> {
    let mut by_day: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for (_, date, completed) in index.entries() {
        if date < start || date > end {
            continue;
        }
        let counts = by_day.entry(date).or_insert((0, 0));
        if completed {
            counts.0 += 1;
        }
        counts.1 += 1;
    }
    by_day
}

fn day_rate(counts: Option<&(u32, u32)>) -> f64 {
    match counts {
        Some(&(completed, logged)) => f64::from(completed) / f64::from(logged) * 100.0,
        None => 0.0,
    }
}

/// Trailing 30-day window ending at `today`, the default calendar span
pub fn calendar_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - chrono::Duration::days(30), today)
}

/// Pooled completion percentage for each day of a range
///
/// A day's percentage divides completions by the entries logged that day;
/// habits with no entry that day stay out of the denominator. Days with no
/// logs at all show as 0 rather than dropping out. Empty habits or an
/// empty log produce an empty series.
pub fn calendar_completion(
    habits: &[Habit],
    index: &LogIndex,
    range: (NaiveDate, NaiveDate),
) -> Vec<DayCompletion> {
    let (start, end) = range;
    if habits.is_empty() || index.is_empty() || start > end {
        return Vec::new();
    }

    let by_day = counts_by_day(index, start, end);
    let mut series = Vec::new();
    let mut day = start;
    while day <= end {
        series.push(DayCompletion {
            date: day,
            pct: day_rate(by_day.get(&day)),
        });
        day = day + chrono::Duration::days(1);
    }

    series
}

/// Habits checked off today versus the total being tracked
pub fn today_progress(habits: &[Habit], index: &LogIndex, today: NaiveDate) -> TodayProgress {
    let completed = habits
        .iter()
        .filter(|habit| index.completed(habit.id, today))
        .count() as u32;

    TodayProgress {
        completed,
        total: habits.len() as u32,
    }
}

/// Current streaks for every habit with any history, longest first
pub fn streak_leaderboard(
    habits: &[Habit],
    index: &LogIndex,
    today: NaiveDate,
) -> Vec<StreakStat> {
    let mut stats: Vec<StreakStat> = habits
        .iter()
        .filter(|habit| index.logged_days(habit.id) > 0)
        .map(|habit| StreakStat {
            habit: habit.name.clone(),
            days: current_streak(index, habit.id, today),
        })
        .collect();

    stats.sort_by(|a, b| b.days.cmp(&a.days));
    stats
}

/// A habit's day-by-day record over the trailing `days` window, oldest first
///
/// `None` marks days that were never logged, which presentation renders
/// differently from an explicit miss.
pub fn recent_history(
    index: &LogIndex,
    habit: HabitId,
    today: NaiveDate,
    days: u32,
) -> Vec<DayStatus> {
    (0..days)
        .rev()
        .map(|back| {
            let date = today - chrono::Duration::days(i64::from(back));
            DayStatus {
                date,
                status: index.status(habit, date),
            }
        })
        .collect()
}
