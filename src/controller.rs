/// Controller layer mapping user intents to repository calls
///
/// Free-text inputs are sanitized here, domain errors are converted into
/// printed user-facing messages, and nothing propagates past this boundary.
/// Every operation is a single request/response; a failed operation is
/// reported and abandoned, never retried.

use chrono::Utc;

use crate::domain::{Habit, Schedule};
use crate::repository::HabitRepository;
use crate::storage::HabitStore;

/// High-level interface for habit operations, backed by a repository
pub struct HabitController<S: HabitStore> {
    repository: HabitRepository<S>,
}

impl<S: HabitStore> HabitController<S> {
    /// Create a controller over the given store
    pub fn new(store: S) -> Self {
        Self {
            repository: HabitRepository::new(store),
        }
    }

    /// Add a new habit, reporting the outcome to the user
    pub fn add_habit(&self, name: &str, description: &str, schedule: &str) {
        let schedule = match schedule.parse::<Schedule>() {
            Ok(s) => s,
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        };

        let habit = Habit::new(name, description, schedule);
        match self.repository.add_habit(&habit) {
            Ok(()) => println!("Habit '{}' added successfully!", habit.name),
            Err(e) => println!("Error: {}", e),
        }
    }

    /// Edit an existing habit
    ///
    /// Omitted or blank fields retain their prior values, so the current
    /// habit is looked up first; if no habit matches the name the edit is
    /// reported and abandoned.
    pub fn edit_habit(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_description: Option<&str>,
        new_schedule: Option<&str>,
    ) {
        let name = name.trim();

        let current = match self.repository.get_habits() {
            Ok(habits) => habits.into_iter().find(|h| h.name == name),
            Err(e) => {
                tracing::error!("Failed to load habits for edit: {}", e);
                println!("Error: {}", e);
                return;
            }
        };

        let current = match current {
            Some(habit) => habit,
            None => {
                println!("Habit '{}' not found.", name);
                return;
            }
        };

        let new_name = non_blank(new_name).unwrap_or(current.name.as_str());
        let new_description = non_blank(new_description).unwrap_or(current.description.as_str());
        let schedule = match non_blank(new_schedule) {
            Some(text) => match text.parse::<Schedule>() {
                Ok(s) => s,
                Err(e) => {
                    println!("Error: {}", e);
                    return;
                }
            },
            None => current.schedule,
        };

        match self
            .repository
            .edit_habit(name, new_name, new_description, schedule)
        {
            Ok(()) => println!("Habit '{}' updated successfully!", new_name),
            Err(e) => println!("Error: {}", e),
        }
    }

    /// Delete a habit and its history
    pub fn delete_habit(&self, name: &str) {
        match self.repository.delete_habit(name) {
            Ok(()) => println!("Habit '{}' deleted successfully!", name.trim()),
            Err(e) => println!("Error: {}", e),
        }
    }

    /// Remove every habit and all logged events
    pub fn clear_all_habits(&self) {
        match self.repository.clear_all_habits() {
            Ok(()) => println!("All habits cleared successfully!"),
            Err(e) => println!("Error: {}", e),
        }
    }

    /// All stored habits; empty on any failure
    pub fn get_all_habits(&self) -> Vec<Habit> {
        match self.repository.get_habits() {
            Ok(habits) => habits,
            Err(e) => {
                tracing::error!("Failed to fetch habits: {}", e);
                println!("Error: {}", e);
                Vec::new()
            }
        }
    }

    /// Habits filtered by schedule text; empty on any failure
    pub fn get_habits_by_schedule(&self, schedule: &str) -> Vec<Habit> {
        let schedule = match schedule.parse::<Schedule>() {
            Ok(s) => s,
            Err(e) => {
                println!("Error: {}", e);
                return Vec::new();
            }
        };

        match self.repository.get_habits_by_schedule(schedule) {
            Ok(habits) => habits,
            Err(e) => {
                tracing::error!("Failed to fetch habits by schedule: {}", e);
                println!("Error: {}", e);
                Vec::new()
            }
        }
    }

    /// Log a completion for today's date (UTC)
    ///
    /// No existence check: events reference habits by name only, matching
    /// the soft foreign key in the schema.
    pub fn mark_done(&self, habit_name: &str) {
        let today = Utc::now().date_naive();
        match self.repository.log_event(habit_name, today) {
            Ok(()) => println!("Habit '{}' marked as done for today!", habit_name.trim()),
            Err(e) => println!("Error: {}", e),
        }
    }

    /// Window count for the given streak type; 0 on any failure
    pub fn calculate_streak(&self, habit_name: &str, streak_type: &str) -> u32 {
        let window = match streak_type.parse::<Schedule>() {
            Ok(w) => w,
            Err(e) => {
                println!("Error: {}", e);
                return 0;
            }
        };

        match self.repository.calculate_streak(habit_name, window) {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("Failed to calculate streak: {}", e);
                println!("Error: {}", e);
                0
            }
        }
    }

    /// Total completions ever logged for a habit; 0 on any failure
    pub fn calculate_all_time_streak(&self, habit_name: &str) -> u32 {
        match self.repository.calculate_all_time_streak(habit_name) {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("Failed to calculate all-time streak: {}", e);
                println!("Error: {}", e);
                0
            }
        }
    }
}

/// Treat omitted and blank strings the same: both mean "keep the prior value"
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;

    fn controller() -> HabitController<SqliteStore> {
        HabitController::new(SqliteStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_add_and_list() {
        let ctl = controller();
        ctl.add_habit("Exercise", "Daily workout", "Daily");

        let habits = ctl.get_all_habits();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Exercise");
    }

    #[test]
    fn test_duplicate_add_is_absorbed() {
        let ctl = controller();
        ctl.add_habit("Exercise", "Daily workout", "Daily");
        ctl.add_habit("exercise", "Evening yoga", "weekly");

        // The second add fails but is only reported, not propagated
        assert_eq!(ctl.get_all_habits().len(), 1);
    }

    #[test]
    fn test_invalid_schedule_is_absorbed() {
        let ctl = controller();
        ctl.add_habit("Exercise", "Daily workout", "fortnightly");

        assert!(ctl.get_all_habits().is_empty());
    }

    #[test]
    fn test_edit_fill_in_retains_prior_values() {
        let ctl = controller();
        ctl.add_habit("Exercise", "Daily workout", "Daily");
        let created_at = ctl.get_all_habits()[0].created_at;

        // Only the description changes; blank name and omitted schedule keep
        // their prior values
        ctl.edit_habit("Exercise", Some("  "), Some("Updated routine"), None);

        let habits = ctl.get_all_habits();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Exercise");
        assert_eq!(habits[0].description, "Updated routine");
        assert_eq!(habits[0].schedule, Schedule::Daily);
        assert_eq!(habits[0].created_at, created_at);
    }

    #[test]
    fn test_edit_missing_habit_is_abandoned() {
        let ctl = controller();
        ctl.edit_habit("Nope", Some("Other"), None, None);

        assert!(ctl.get_all_habits().is_empty());
    }

    #[test]
    fn test_mark_done_and_streak() {
        let ctl = controller();
        ctl.add_habit("Exercise", "Daily workout", "Daily");

        ctl.mark_done("Exercise");
        ctl.mark_done("Exercise");

        assert_eq!(ctl.calculate_streak("Exercise", "daily"), 2);
        assert_eq!(ctl.calculate_all_time_streak("Exercise"), 2);
    }

    #[test]
    fn test_streak_of_unknown_habit_is_zero() {
        let ctl = controller();
        assert_eq!(ctl.calculate_streak("Ghost", "daily"), 0);
        assert_eq!(ctl.calculate_all_time_streak("Ghost"), 0);
    }

    #[test]
    fn test_invalid_window_is_zero() {
        let ctl = controller();
        ctl.add_habit("Exercise", "Daily workout", "Daily");
        ctl.mark_done("Exercise");

        assert_eq!(ctl.calculate_streak("Exercise", "yearly"), 0);
    }
}
