/// Habit entity
///
/// This module defines the Habit struct that represents a recurring activity
/// the user wants to track. The habit's name is its identifying key from the
/// application's perspective.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::domain::Schedule;

/// A habit the user wants to perform on a recurring schedule
///
/// Names are unique case-insensitively across the whole habit set; the
/// repository enforces that before insert. The creation timestamp is assigned
/// by the storage layer when the habit is first persisted and never changes
/// afterwards, so it is `None` on a habit that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Display name and identifying key (e.g. "Morning Run")
    pub name: String,
    /// Free-text description, may be empty
    pub description: String,
    /// How often this habit recurs
    pub schedule: Schedule,
    /// When this habit was first persisted; set once by the storage layer
    pub created_at: Option<DateTime<Utc>>,
}

impl Habit {
    /// Create a new, not-yet-persisted habit
    ///
    /// Leading and trailing whitespace is stripped from the name and
    /// description. Emptiness and uniqueness are checked by the repository
    /// on add, not here.
    pub fn new(name: &str, description: &str, schedule: Schedule) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            schedule,
            created_at: None,
        }
    }

    /// Reconstruct a habit from a stored row
    pub fn from_row(
        name: String,
        description: String,
        schedule: Schedule,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            description,
            schedule,
            created_at: Some(created_at),
        }
    }

    /// Creation timestamp rendered for display, empty if never persisted
    pub fn created_at_display(&self) -> String {
        self.created_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default()
    }
}
