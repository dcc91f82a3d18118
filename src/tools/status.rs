/// Action for the daily dashboard
///
/// The no-argument form covers every habit: today's progress, per-habit
/// streaks, which streaks are at risk, and the all-time longest run. With
/// a habit selected it narrows to that habit and adds its recent activity.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::analytics::{
    recent_history, today_progress, DayStatus, TodayProgress,
};
use crate::domain::{current_streak, habits_needing_attention, longest_streak, LongestStreak};
use crate::storage::RecordStore;
use crate::tools::{load_snapshot, resolve_habit};
use crate::TrackerError;

/// Days of history shown in the single-habit view
const HISTORY_DAYS: u32 = 7;

/// Parameters for the status dashboard
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    /// Habit name or id prefix; omitted means all habits
    pub habit: Option<String>,
}

/// One habit's line on the dashboard
#[derive(Debug, Serialize)]
pub struct HabitStatusLine {
    pub habit_id: String,
    pub name: String,
    pub category: String,
    pub current_streak: u32,
    pub completed_today: bool,
    /// Day-by-day recent activity, only in the single-habit view
    pub history: Option<Vec<DayStatus>>,
}

/// Response from the status dashboard
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub progress: TodayProgress,
    pub habits: Vec<HabitStatusLine>,
    pub needs_attention: Vec<String>,
    pub longest: LongestStreak,
    pub message: String,
}

/// Build the status dashboard from the current records
pub fn dashboard<S: RecordStore>(
    store: &S,
    params: StatusParams,
) -> Result<StatusResponse, TrackerError> {
    let (habits, index) = load_snapshot(store);
    let today = Local::now().date_naive();

    let selected = match &params.habit {
        Some(selector) => vec![resolve_habit(&habits, selector)?.clone()],
        None => habits.clone(),
    };
    let detailed = params.habit.is_some();

    let lines: Vec<HabitStatusLine> = selected
        .iter()
        .map(|habit| HabitStatusLine {
            habit_id: habit.id.to_string(),
            name: habit.name.clone(),
            category: habit.category.clone(),
            current_streak: current_streak(&index, habit.id, today),
            completed_today: index.completed(habit.id, today),
            history: detailed.then(|| recent_history(&index, habit.id, today, HISTORY_DAYS)),
        })
        .collect();

    let progress = today_progress(&selected, &index, today);
    let needs_attention = habits_needing_attention(&selected, &index, today);
    let longest = longest_streak(&selected, &index);

    let message = render_message(&lines, progress, &needs_attention, &longest);

    Ok(StatusResponse {
        progress,
        habits: lines,
        needs_attention,
        longest,
        message,
    })
}

fn render_message(
    lines: &[HabitStatusLine],
    progress: TodayProgress,
    needs_attention: &[String],
    longest: &LongestStreak,
) -> String {
    if lines.is_empty() {
        return "No habits yet. Add one to get started!".to_string();
    }

    let mut out = vec![format!(
        "📊 Today: {}/{} habits completed",
        progress.completed, progress.total
    )];

    if longest.days > 0 {
        out.push(format!(
            "🏆 Longest streak: {} day{} ({})",
            longest.days,
            if longest.days == 1 { "" } else { "s" },
            longest.habit
        ));
    }

    for line in lines {
        let check = if line.completed_today { "✓" } else { " " };
        let mut text = format!(
            "[{}] {} [{}] | Streak: {} day{}",
            check,
            line.name,
            line.category,
            line.current_streak,
            if line.current_streak == 1 { "" } else { "s" }
        );
        if let Some(history) = &line.history {
            let marks: String = history
                .iter()
                .map(|day| match day.status {
                    Some(true) => '✓',
                    Some(false) => '✗',
                    None => '·',
                })
                .collect();
            text.push_str(&format!("\n    Last {} days: {}", history.len(), marks));
        }
        out.push(text);
    }

    if !needs_attention.is_empty() {
        out.push(format!(
            "⚠️ Don't break the chain: {}",
            needs_attention.join(", ")
        ));
    }

    out.join("\n")
}
