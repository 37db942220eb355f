/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing habits and their completion events.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Habit, Schedule};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("habit '{name}' already exists")]
    DuplicateName { name: String },
}

/// Trait defining the storage interface for habits and events
///
/// This trait allows swapping SQLite for another backend and lets the
/// repository and controller layers be tested against any store.
pub trait HabitStore {
    /// Insert a new habit row, assigning its creation timestamp
    fn insert_habit(
        &self,
        name: &str,
        description: &str,
        schedule: Schedule,
    ) -> Result<(), StorageError>;

    /// Update the mutable fields of the habit matching `old_name`
    ///
    /// Updating a habit that does not exist is a silent no-op. The creation
    /// timestamp is never rewritten.
    fn edit_habit(
        &self,
        old_name: &str,
        new_name: &str,
        description: &str,
        schedule: Schedule,
    ) -> Result<(), StorageError>;

    /// Remove a habit row and every event logged under its name
    fn delete_habit(&self, name: &str) -> Result<(), StorageError>;

    /// Empty both the habits and events tables
    fn clear_all_habits(&self) -> Result<(), StorageError>;

    /// Fetch all habits
    fn fetch_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Fetch habits matching a schedule
    fn fetch_habits_by_schedule(&self, schedule: Schedule) -> Result<Vec<Habit>, StorageError>;

    /// Append one completion event; same-day duplicates are permitted
    fn log_event(&self, habit_name: &str, date: NaiveDate) -> Result<(), StorageError>;

    /// Count events inside a trailing window anchored at today
    ///
    /// Daily counts events dated exactly today, weekly events within the last
    /// 7 days inclusive, monthly within the last 30. This is a window count,
    /// not a consecutive-streak calculation: a gap inside the window is not
    /// detected.
    fn count_habit_events(&self, habit_name: &str, window: Schedule)
        -> Result<u32, StorageError>;

    /// Count all events ever logged for a habit, regardless of date
    fn count_all_time(&self, habit_name: &str) -> Result<u32, StorageError>;
}
