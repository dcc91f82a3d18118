/// Streak and analytics behavior through the public API
use chrono::NaiveDate;
use habit_tracker_cli::analytics;
use habit_tracker_cli::*;

#[cfg(test)]
mod engine_api_tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn habit(name: &str) -> Habit {
        Habit::new(name, "Health", Frequency::Daily).unwrap()
    }

    /// `len` consecutive completed days ending at `last`
    fn run_ending(id: HabitId, last: NaiveDate, len: u32) -> Vec<LogEntry> {
        (0..len)
            .map(|i| LogEntry::new(id, last - chrono::Duration::days(i64::from(i)), true))
            .collect()
    }

    #[test]
    fn test_habits_are_indexed_independently() {
        let a = habit("Run");
        let b = habit("Read");
        let today = date("2024-03-15");

        let mut entries = run_ending(a.id, today, 3);
        entries.extend(run_ending(b.id, today - chrono::Duration::days(5), 8));
        let index = LogIndex::from_entries(&entries);

        assert_eq!(current_streak(&index, a.id, today), 3);
        // b's run ended five days ago, so nothing is live.
        assert_eq!(current_streak(&index, b.id, today), 0);

        let best = longest_streak(&[a, b], &index);
        assert_eq!(best.habit, "Read");
        assert_eq!(best.days, 8);
    }

    #[test]
    fn test_long_history_with_breaks_stays_consistent() {
        let a = habit("Write");
        let today = date("2024-03-31");

        // Three separate runs: 10 days, an explicit miss, 12 days, a gap,
        // then 5 days running through today.
        let mut entries = run_ending(a.id, date("2024-03-10"), 10);
        entries.push(LogEntry::new(a.id, date("2024-03-11"), false));
        entries.extend(run_ending(a.id, date("2024-03-23"), 12));
        entries.extend(run_ending(a.id, today, 5));
        let index = LogIndex::from_entries(&entries);

        assert_eq!(current_streak(&index, a.id, today), 5);

        let best = longest_streak(&[a.clone()], &index);
        assert_eq!(best.days, 12);

        // 27 completed days out of 28 logged.
        let rate = analytics::completion_rate(&index, a.id).unwrap();
        assert!((rate - 27.0 / 28.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_attention_list_keeps_input_order() {
        let first = habit("First");
        let second = habit("Second");
        let today = date("2024-03-15");
        let yesterday = today - chrono::Duration::days(1);

        let mut entries = run_ending(first.id, yesterday, 2);
        entries.extend(run_ending(second.id, yesterday, 4));
        let index = LogIndex::from_entries(&entries);

        let flagged = habits_needing_attention(&[first, second], &index, today);
        assert_eq!(flagged, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_duplicate_entries_collapse_to_the_last() {
        let a = habit("Run");
        let day = date("2024-03-15");
        let entries = vec![
            LogEntry::new(a.id, day, true),
            LogEntry::new(a.id, day, false),
        ];
        let index = LogIndex::from_entries(&entries);

        assert_eq!(index.status(a.id, day), Some(false));
        assert_eq!(index.logged_days(a.id), 1);
    }

    #[test]
    fn test_trend_and_calendar_agree_on_range_length() {
        let a = habit("Run");
        let entries = run_ending(a.id, date("2024-03-10"), 4);
        let index = LogIndex::from_entries(&entries);
        let range = (date("2024-03-01"), date("2024-03-14"));

        let trend = analytics::daily_completion_trend(&index, range.0, range.1);
        let calendar = analytics::calendar_completion(&[a], &index, range);

        assert_eq!(trend.len(), 14);
        assert_eq!(calendar.len(), 14);
        assert_eq!(trend[0].date, calendar[0].date);
    }
}
