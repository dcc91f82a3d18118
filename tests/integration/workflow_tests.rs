/// End-to-end workflows through the action layer
use chrono::{Duration, Local};
use habit_tracker_cli::tools;
use habit_tracker_cli::*;
use tempfile::tempdir;

#[cfg(test)]
mod workflow_tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::open(dir.path()).unwrap()
    }

    #[test]
    fn test_full_habit_lifecycle() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let today = Local::now().date_naive();
        let yesterday = today - Duration::days(1);

        // Add.
        let created = tools::create_habit(
            &store,
            tools::CreateHabitParams {
                name: "Meditate".to_string(),
                category: "Mindfulness".to_string(),
                frequency: "daily".to_string(),
            },
        )
        .unwrap();
        assert!(created.success);

        // Log two consecutive days.
        tools::log_completion(
            &store,
            tools::LogCompletionParams {
                habit: "Meditate".to_string(),
                date: Some(yesterday.to_string()),
                completed: true,
            },
        )
        .unwrap();
        let logged = tools::log_completion(
            &store,
            tools::LogCompletionParams {
                habit: "Meditate".to_string(),
                date: None,
                completed: true,
            },
        )
        .unwrap();
        assert_eq!(logged.current_streak, 2);

        // The dashboard agrees.
        let status = tools::dashboard(&store, tools::StatusParams { habit: None }).unwrap();
        assert_eq!(status.progress.completed, 1);
        assert_eq!(status.progress.total, 1);
        assert_eq!(status.longest.days, 2);
        assert!(status.needs_attention.is_empty());

        // So does the list.
        let listed = tools::list_habits(&store, tools::ListHabitsParams { category: None }).unwrap();
        assert_eq!(listed.habits[0].current_streak, 2);
        assert_eq!(listed.habits[0].completion_rate, Some(100.0));

        // Rename, then remove.
        tools::update_habit(
            &store,
            tools::UpdateHabitParams {
                habit: "Meditate".to_string(),
                name: Some("Meditate daily".to_string()),
                category: None,
                frequency: None,
            },
        )
        .unwrap();
        let removed = tools::delete_habit(
            &store,
            tools::DeleteHabitParams {
                habit: "Meditate daily".to_string(),
            },
        )
        .unwrap();

        assert_eq!(removed.removed_logs, 2);
        assert!(store.load_habits().is_empty());
        assert!(store.load_logs().is_empty());
    }

    #[test]
    fn test_attention_flag_for_streak_at_risk() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let today = Local::now().date_naive();

        tools::create_habit(
            &store,
            tools::CreateHabitParams {
                name: "Stretch".to_string(),
                category: "Health".to_string(),
                frequency: "daily".to_string(),
            },
        )
        .unwrap();

        // Two completed days ending yesterday, nothing today.
        for back in [2, 1] {
            let date = today - Duration::days(back);
            tools::log_completion(
                &store,
                tools::LogCompletionParams {
                    habit: "Stretch".to_string(),
                    date: Some(date.to_string()),
                    completed: true,
                },
            )
            .unwrap();
        }

        let status = tools::dashboard(&store, tools::StatusParams { habit: None }).unwrap();
        assert_eq!(status.needs_attention, vec!["Stretch".to_string()]);

        // Checking in clears the flag.
        tools::log_completion(
            &store,
            tools::LogCompletionParams {
                habit: "Stretch".to_string(),
                date: None,
                completed: true,
            },
        )
        .unwrap();
        let status = tools::dashboard(&store, tools::StatusParams { habit: None }).unwrap();
        assert!(status.needs_attention.is_empty());
    }

    #[test]
    fn test_stats_with_an_explicit_range() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        tools::create_habit(
            &store,
            tools::CreateHabitParams {
                name: "Read".to_string(),
                category: "Learning".to_string(),
                frequency: "daily".to_string(),
            },
        )
        .unwrap();
        for day in ["2024-03-01", "2024-03-02", "2024-03-04"] {
            tools::log_completion(
                &store,
                tools::LogCompletionParams {
                    habit: "Read".to_string(),
                    date: Some(day.to_string()),
                    completed: true,
                },
            )
            .unwrap();
        }

        let report = tools::stats(
            &store,
            tools::StatsParams {
                start: Some("2024-03-01".to_string()),
                end: Some("2024-03-05".to_string()),
            },
        )
        .unwrap();

        assert_eq!(report.trend.len(), 5);
        assert_eq!(report.calendar.len(), 5);
        assert_eq!(report.rates.len(), 1);
        assert_eq!(report.rates[0].rate, 100.0);
        // Day three has no logs, so the pooled rate drops to zero there.
        assert_eq!(report.trend[2].rate, 0.0);
        assert_eq!(report.calendar[2].pct, 0.0);
        // Every logged habit shows on the streak board, even at zero.
        assert_eq!(report.streaks.len(), 1);
        assert_eq!(report.streaks[0].habit, "Read");
    }

    #[test]
    fn test_backup_round_trip_between_stores() {
        let source_dir = tempdir().unwrap();
        let source = open_store(&source_dir);
        let today = Local::now().date_naive();

        tools::create_habit(
            &source,
            tools::CreateHabitParams {
                name: "Row".to_string(),
                category: "Fitness".to_string(),
                frequency: "daily".to_string(),
            },
        )
        .unwrap();
        tools::log_completion(
            &source,
            tools::LogCompletionParams {
                habit: "Row".to_string(),
                date: Some(today.to_string()),
                completed: true,
            },
        )
        .unwrap();

        let backup_path = source_dir.path().join("backup.json");
        let exported = tools::export_backup(
            &source,
            tools::ExportParams {
                path: Some(backup_path.to_string_lossy().into_owned()),
            },
        )
        .unwrap();
        assert_eq!(exported.habits, 1);
        assert_eq!(exported.logs, 1);

        let target_dir = tempdir().unwrap();
        let target = open_store(&target_dir);
        let imported = tools::import_backup(
            &target,
            tools::ImportParams {
                path: backup_path.to_string_lossy().into_owned(),
            },
        )
        .unwrap();

        assert_eq!(imported.habits, 1);
        assert_eq!(target.load_habits(), source.load_habits());
        assert_eq!(target.load_logs(), source.load_logs());
    }

    #[test]
    fn test_ambiguous_selector_is_an_error() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        for _ in 0..2 {
            tools::create_habit(
                &store,
                tools::CreateHabitParams {
                    name: "Twin".to_string(),
                    category: "Health".to_string(),
                    frequency: "daily".to_string(),
                },
            )
            .unwrap();
        }

        let result = tools::log_completion(
            &store,
            tools::LogCompletionParams {
                habit: "Twin".to_string(),
                date: None,
                completed: true,
            },
        );

        assert!(matches!(
            result,
            Err(TrackerError::Storage(StorageError::AmbiguousHabit { .. }))
        ));
    }
}
