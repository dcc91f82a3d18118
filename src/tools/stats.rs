/// Action for completion statistics
///
/// Pulls the aggregator series together for one report: per-habit
/// completion rates, the smoothed daily trend, the calendar view, and the
/// streak leaderboard. The default window is the trailing 30 days ending
/// today.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analytics::{
    calendar_completion, calendar_range, completion_rates, daily_completion_trend,
    streak_leaderboard, CompletionStat, DayCompletion, StreakStat, TrendPoint,
};
use crate::domain::DomainError;
use crate::storage::RecordStore;
use crate::tools::load_snapshot;
use crate::TrackerError;

/// Parameters for the stats report
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    /// Range start, `YYYY-MM-DD`; defaults to 30 days before today
    pub start: Option<String>,
    /// Range end, `YYYY-MM-DD`; defaults to today
    pub end: Option<String>,
}

/// Response from the stats report
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rates: Vec<CompletionStat>,
    pub trend: Vec<TrendPoint>,
    pub calendar: Vec<DayCompletion>,
    pub streaks: Vec<StreakStat>,
    pub message: String,
}

/// Build the stats report over a date range
pub fn stats<S: RecordStore>(
    store: &S,
    params: StatsParams,
) -> Result<StatsResponse, TrackerError> {
    let today = Local::now().date_naive();
    let (default_start, default_end) = calendar_range(today);
    let start = parse_or(params.start, default_start)?;
    let end = parse_or(params.end, default_end)?;
    if start > end {
        return Err(
            DomainError::InvalidDate(format!("range start {} is after end {}", start, end)).into(),
        );
    }

    let (habits, index) = load_snapshot(store);
    let rates = completion_rates(&habits, &index);
    let trend = daily_completion_trend(&index, start, end);
    let calendar = calendar_completion(&habits, &index, (start, end));
    let streaks = streak_leaderboard(&habits, &index, today);

    let message = render_message(start, end, &rates, &streaks);

    Ok(StatsResponse {
        start,
        end,
        rates,
        trend,
        calendar,
        streaks,
        message,
    })
}

fn parse_or(raw: Option<String>, default: NaiveDate) -> Result<NaiveDate, TrackerError> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| {
                DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", raw)).into()
            }),
        None => Ok(default),
    }
}

fn render_message(
    start: NaiveDate,
    end: NaiveDate,
    rates: &[CompletionStat],
    streaks: &[StreakStat],
) -> String {
    if rates.is_empty() {
        return "No completion data yet. Log some habits first!".to_string();
    }

    let mut out = vec![format!("📈 Completion from {} to {}", start, end)];
    for stat in rates {
        out.push(format!(
            "• {}: {:.1}% ({}/{} days)",
            stat.habit, stat.rate, stat.completed, stat.logged
        ));
    }

    if !streaks.is_empty() {
        out.push("🔥 Current streaks:".to_string());
        for streak in streaks {
            out.push(format!(
                "• {}: {} day{}",
                streak.habit,
                streak.days,
                if streak.days == 1 { "" } else { "s" }
            ));
        }
    }

    out.join("\n")
}
