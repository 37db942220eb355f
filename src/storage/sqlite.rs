/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data conversion.

use std::path::PathBuf;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::domain::{Habit, Schedule};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based storage implementation
///
/// This struct owns the connection to the SQLite database and implements
/// all the operations defined in the HabitStore trait. Each call commits
/// immediately; no transaction spans more than one logical operation.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database file and run any pending migrations
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at {:?}", db_path);

        Ok(Self { conn })
    }

    /// Open an in-memory database, mainly for tests and ephemeral runs
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Translate a UNIQUE-constraint failure on habits.name into the typed
    /// duplicate error; everything else passes through as a query error
    fn map_constraint(name: &str, err: rusqlite::Error) -> StorageError {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::DuplicateName {
                    name: name.to_string(),
                }
            }
            other => StorageError::Query(other),
        }
    }

    /// Map one habits row to the entity
    fn habit_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Habit> {
        let schedule_str: String = row.get(2)?;
        let schedule = schedule_str.parse::<Schedule>().map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                2,
                "invalid schedule".to_string(),
                rusqlite::types::Type::Text,
            )
        })?;

        let created_at_str: String = row.get(3)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    3,
                    "invalid datetime".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?
            .with_timezone(&Utc);

        Ok(Habit::from_row(row.get(0)?, row.get(1)?, schedule, created_at))
    }
}

impl HabitStore for SqliteStore {
    /// Insert a new habit row with a server-assigned creation timestamp
    fn insert_habit(
        &self,
        name: &str,
        description: &str,
        schedule: Schedule,
    ) -> Result<(), StorageError> {
        let created_at = Utc::now().to_rfc3339();

        self.conn
            .execute(
                "INSERT INTO habits (name, description, schedule, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![name, description, schedule.as_str(), created_at],
            )
            .map_err(|e| Self::map_constraint(name, e))?;

        tracing::debug!("Created habit '{}' ({})", name, schedule);
        Ok(())
    }

    /// Update name, description, and schedule of the row matching old_name
    ///
    /// created_at is deliberately left out of the SET list. Zero matched
    /// rows is not an error.
    fn edit_habit(
        &self,
        old_name: &str,
        new_name: &str,
        description: &str,
        schedule: Schedule,
    ) -> Result<(), StorageError> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE habits
                 SET name = ?1, description = ?2, schedule = ?3
                 WHERE name = ?4",
                params![new_name, description, schedule.as_str(), old_name],
            )
            .map_err(|e| Self::map_constraint(new_name, e))?;

        if rows_affected == 0 {
            tracing::debug!("Edit matched no habit named '{}'", old_name);
        } else {
            tracing::debug!("Updated habit '{}' -> '{}'", old_name, new_name);
        }
        Ok(())
    }

    /// Remove the habit row and all events logged under that name
    fn delete_habit(&self, name: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM habits WHERE name = ?1", params![name])?;
        self.conn
            .execute("DELETE FROM habit_events WHERE habit_name = ?1", params![name])?;

        tracing::debug!("Deleted habit '{}' and its events", name);
        Ok(())
    }

    /// Empty both tables
    fn clear_all_habits(&self) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM habits", [])?;
        self.conn.execute("DELETE FROM habit_events", [])?;

        tracing::debug!("Cleared all habits and events");
        Ok(())
    }

    /// Fetch all habits in insertion order
    fn fetch_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, description, schedule, created_at FROM habits ORDER BY id")?;

        let habit_iter = stmt.query_map([], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// Fetch habits matching a schedule, in insertion order
    fn fetch_habits_by_schedule(&self, schedule: Schedule) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT name, description, schedule, created_at FROM habits
             WHERE schedule = ?1 ORDER BY id",
        )?;

        let habit_iter = stmt.query_map(params![schedule.as_str()], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// Append one completion event
    ///
    /// No dedup: several events for the same habit and date all count.
    fn log_event(&self, habit_name: &str, date: NaiveDate) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO habit_events (habit_name, date) VALUES (?1, ?2)",
            params![habit_name, date.to_string()],
        )?;

        tracing::debug!("Logged event for '{}' on {}", habit_name, date);
        Ok(())
    }

    /// Count events inside the trailing window anchored at today (UTC)
    ///
    /// Dates are stored as ISO-8601 text, so the >= comparison is a plain
    /// lexicographic one.
    fn count_habit_events(
        &self,
        habit_name: &str,
        window: Schedule,
    ) -> Result<u32, StorageError> {
        let today = Utc::now().date_naive();

        let count = match window {
            Schedule::Daily => self.conn.query_row(
                "SELECT COUNT(*) FROM habit_events WHERE habit_name = ?1 AND date = ?2",
                params![habit_name, today.to_string()],
                |row| row.get::<_, u32>(0),
            )?,
            Schedule::Weekly => {
                let cutoff = today - Duration::days(7);
                self.conn.query_row(
                    "SELECT COUNT(*) FROM habit_events WHERE habit_name = ?1 AND date >= ?2",
                    params![habit_name, cutoff.to_string()],
                    |row| row.get::<_, u32>(0),
                )?
            }
            Schedule::Monthly => {
                let cutoff = today - Duration::days(30);
                self.conn.query_row(
                    "SELECT COUNT(*) FROM habit_events WHERE habit_name = ?1 AND date >= ?2",
                    params![habit_name, cutoff.to_string()],
                    |row| row.get::<_, u32>(0),
                )?
            }
        };

        Ok(count)
    }

    /// Count every event ever logged for a habit
    fn count_all_time(&self, habit_name: &str) -> Result<u32, StorageError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM habit_events WHERE habit_name = ?1",
            params![habit_name],
            |row| row.get::<_, u32>(0),
        )?;

        Ok(count)
    }
}
