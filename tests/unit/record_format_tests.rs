/// On-disk record format stability
///
/// The JSON field names and date formats below are what existing record
/// files contain; changing them silently orphans user data.
use habit_tracker_cli::*;
use serde_json::json;

#[cfg(test)]
mod record_format_tests {
    use super::*;

    #[test]
    fn test_habit_record_form() {
        let habit: Habit = serde_json::from_value(json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Morning run",
            "category": "Fitness",
            "frequency": "Daily",
            "created_at": "2024-03-01"
        }))
        .unwrap();

        assert_eq!(habit.name, "Morning run");
        assert_eq!(habit.frequency, Frequency::Daily);
        assert_eq!(habit.id.to_string(), "550e8400-e29b-41d4-a716-446655440000");

        let value = serde_json::to_value(&habit).unwrap();
        assert_eq!(value["id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(value["frequency"], "Daily");
        assert_eq!(value["created_at"], "2024-03-01");
    }

    #[test]
    fn test_log_record_form() {
        let log: LogEntry = serde_json::from_value(json!({
            "habit_id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2024-03-15",
            "completed": true
        }))
        .unwrap();

        assert!(log.completed);
        assert_eq!(log.date, "2024-03-15".parse::<chrono::NaiveDate>().unwrap());

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["habit_id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(value["date"], "2024-03-15");
        assert_eq!(value["completed"], true);
    }

    #[test]
    fn test_all_frequency_variants_round_trip() {
        for frequency in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Custom,
        ] {
            let value = serde_json::to_value(frequency).unwrap();
            let back: Frequency = serde_json::from_value(value).unwrap();
            assert_eq!(back, frequency);
        }
    }

    #[test]
    fn test_unknown_frequency_variant_is_rejected() {
        let result: Result<Frequency, _> = serde_json::from_value(json!("Fortnightly"));
        assert!(result.is_err());
    }
}
