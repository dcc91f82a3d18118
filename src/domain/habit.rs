/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents something the
/// user wants to do regularly, along with its validation rules.

use serde::{Deserialize, Serialize};
use chrono::{Local, NaiveDate};
use crate::domain::{DomainError, Frequency, HabitId};

/// A habit the user tracks day by day
///
/// The central record of the system. Identity (`id`) and `created_at` are
/// fixed at creation; `name`, `category` and `frequency` can be edited
/// later. Deleting a habit cascades to every log entry referencing it,
/// which the storage layer takes care of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, stable across renames
    pub id: HabitId,
    /// Display name (e.g. "Morning Run", "Read 20 pages")
    pub name: String,
    /// Free-form grouping label (e.g. "Health", "Productivity")
    pub category: String,
    /// How often the habit is meant to happen
    pub frequency: Frequency,
    /// Calendar date the habit was created
    pub created_at: NaiveDate,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// Assigns a fresh random id and stamps today's local date. Name and
    /// category are stored trimmed.
    pub fn new(name: &str, category: &str, frequency: Frequency) -> Result<Self, DomainError> {
        Self::validate_name(name)?;
        Self::validate_category(category)?;

        Ok(Self {
            id: HabitId::new(),
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            frequency,
            created_at: Local::now().date_naive(),
        })
    }

    /// Apply edits to this habit, validating every new value before any
    /// field changes
    pub fn update(
        &mut self,
        name: Option<String>,
        category: Option<String>,
        frequency: Option<Frequency>,
    ) -> Result<(), DomainError> {
        if let Some(ref new_name) = name {
            Self::validate_name(new_name)?;
        }
        if let Some(ref new_category) = category {
            Self::validate_category(new_category)?;
        }

        if let Some(new_name) = name {
            self.name = new_name.trim().to_string();
        }
        if let Some(new_category) = category {
            self.category = new_category.trim().to_string();
        }
        if let Some(new_frequency) = frequency {
            self.frequency = new_frequency;
        }

        Ok(())
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the category label
    fn validate_category(category: &str) -> Result<(), DomainError> {
        if category.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Category cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
