/// Repository layer enforcing domain invariants over the storage interface
///
/// The repository sits between the controller and the store: it normalizes
/// incoming strings, rejects invalid adds before they reach SQLite, and
/// otherwise delegates straight through.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Habit, Schedule};
use crate::storage::{HabitStore, StorageError};

/// Errors raised when a domain invariant is violated on add
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("habit name cannot be empty")]
    EmptyName,

    #[error("habit '{name}' already exists")]
    DuplicateName { name: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Data access layer for habits, generic over the backing store
pub struct HabitRepository<S: HabitStore> {
    store: S,
}

impl<S: HabitStore> HabitRepository<S> {
    /// Create a repository over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a new habit
    ///
    /// Fails if the trimmed name is empty or if any existing habit's name
    /// matches case-insensitively. The check runs in memory against the full
    /// current habit set before the insert; the UNIQUE constraint on
    /// habits.name is the storage-level backstop.
    pub fn add_habit(&self, habit: &Habit) -> Result<(), RepositoryError> {
        let name = habit.name.trim();
        if name.is_empty() {
            return Err(RepositoryError::EmptyName);
        }

        let normalized = name.to_lowercase();
        let existing = self.store.fetch_habits()?;
        if existing
            .iter()
            .any(|h| h.name.trim().to_lowercase() == normalized)
        {
            return Err(RepositoryError::DuplicateName {
                name: habit.name.clone(),
            });
        }

        self.store
            .insert_habit(name, habit.description.trim(), habit.schedule)?;
        Ok(())
    }

    /// Update an existing habit's name, description, and schedule
    ///
    /// Editing a habit that does not exist is a silent no-op; callers that
    /// care check existence first.
    pub fn edit_habit(
        &self,
        old_name: &str,
        new_name: &str,
        description: &str,
        schedule: Schedule,
    ) -> Result<(), RepositoryError> {
        self.store.edit_habit(
            old_name.trim(),
            new_name.trim(),
            description.trim(),
            schedule,
        )?;
        Ok(())
    }

    /// Delete a habit and its logged events
    pub fn delete_habit(&self, name: &str) -> Result<(), RepositoryError> {
        self.store.delete_habit(name.trim())?;
        Ok(())
    }

    /// Remove all habits and events
    pub fn clear_all_habits(&self) -> Result<(), RepositoryError> {
        self.store.clear_all_habits()?;
        Ok(())
    }

    /// All habits currently stored
    pub fn get_habits(&self) -> Result<Vec<Habit>, RepositoryError> {
        Ok(self.store.fetch_habits()?)
    }

    /// Habits filtered by schedule
    pub fn get_habits_by_schedule(
        &self,
        schedule: Schedule,
    ) -> Result<Vec<Habit>, RepositoryError> {
        Ok(self.store.fetch_habits_by_schedule(schedule)?)
    }

    /// Record a completion event for a habit on the given date
    pub fn log_event(&self, habit_name: &str, date: NaiveDate) -> Result<(), RepositoryError> {
        self.store.log_event(habit_name.trim(), date)?;
        Ok(())
    }

    /// Count completions inside the trailing window for the given type
    pub fn calculate_streak(
        &self,
        habit_name: &str,
        window: Schedule,
    ) -> Result<u32, RepositoryError> {
        Ok(self.store.count_habit_events(habit_name.trim(), window)?)
    }

    /// Count all completions ever logged for a habit
    pub fn calculate_all_time_streak(&self, habit_name: &str) -> Result<u32, RepositoryError> {
        Ok(self.store.count_all_time(habit_name.trim())?)
    }
}
