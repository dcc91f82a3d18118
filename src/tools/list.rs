/// Action for listing habits

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analytics::completion_rate;
use crate::domain::current_streak;
use crate::storage::RecordStore;
use crate::tools::load_snapshot;
use crate::TrackerError;

/// Parameters for listing habits
#[derive(Debug, Deserialize)]
pub struct ListHabitsParams {
    /// Case-insensitive category filter
    pub category: Option<String>,
}

/// Information about one habit in the list
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    pub name: String,
    pub category: String,
    pub frequency: String,
    pub created_at: NaiveDate,
    pub current_streak: u32,
    /// Percent of logged days completed; `None` until the habit is logged
    pub completion_rate: Option<f64>,
}

/// Aggregate numbers over the listed habits
#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub total_habits: u32,
    /// Mean completion rate over habits with any history
    pub avg_completion_rate: f64,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub summary: ListSummary,
    pub message: String,
}

/// List habits with streak and completion-rate summaries
pub fn list_habits<S: RecordStore>(
    store: &S,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, TrackerError> {
    let (habits, index) = load_snapshot(store);
    let today = Local::now().date_naive();

    let filter = params.category.map(|c| c.to_lowercase());
    let summaries: Vec<HabitSummary> = habits
        .iter()
        .filter(|habit| match &filter {
            Some(category) => habit.category.to_lowercase() == *category,
            None => true,
        })
        .map(|habit| HabitSummary {
            habit_id: habit.id.to_string(),
            name: habit.name.clone(),
            category: habit.category.clone(),
            frequency: habit.frequency.to_string(),
            created_at: habit.created_at,
            current_streak: current_streak(&index, habit.id, today),
            completion_rate: completion_rate(&index, habit.id),
        })
        .collect();

    let rates: Vec<f64> = summaries
        .iter()
        .filter_map(|summary| summary.completion_rate)
        .collect();
    let avg_completion_rate = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    let summary = ListSummary {
        total_habits: summaries.len() as u32,
        avg_completion_rate,
    };
    let message = render_message(&summaries, &summary);

    Ok(ListHabitsResponse {
        habits: summaries,
        summary,
        message,
    })
}

fn render_message(summaries: &[HabitSummary], summary: &ListSummary) -> String {
    if summaries.is_empty() {
        return "No habits found.".to_string();
    }

    let mut out = vec![format!(
        "📋 {} habit{}, average completion {:.1}%",
        summary.total_habits,
        if summary.total_habits == 1 { "" } else { "s" },
        summary.avg_completion_rate
    )];

    for item in summaries {
        let rate = match item.completion_rate {
            Some(rate) => format!("{:.1}%", rate),
            None => "never logged".to_string(),
        };
        out.push(format!(
            "• {} [{}] {} | since {} | streak {} | rate {}",
            item.name,
            item.category,
            item.frequency,
            item.created_at,
            item.current_streak,
            rate
        ));
    }

    out.join("\n")
}
