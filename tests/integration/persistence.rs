/// Persistence across process-style reopen of the same database file
use habit_tracker::{Habit, HabitRepository, Schedule, SqliteStore};
use tempfile::NamedTempFile;

#[test]
fn test_habits_survive_reopen() {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let db_path = temp_file.path().to_path_buf();
    let today = chrono::Utc::now().date_naive();

    {
        let repo = HabitRepository::new(SqliteStore::new(db_path.clone()).unwrap());
        repo.add_habit(&Habit::new("Reading", "One chapter", Schedule::Weekly))
            .unwrap();
        repo.log_event("Reading", today).unwrap();
    }

    // Reopening runs the migrations again; they must be idempotent and the
    // data must still be there
    let repo = HabitRepository::new(SqliteStore::new(db_path).unwrap());
    let habits = repo.get_habits().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Reading");
    assert_eq!(habits[0].schedule, Schedule::Weekly);
    assert_eq!(repo.calculate_all_time_streak("Reading").unwrap(), 1);
}

#[test]
fn test_duplicate_check_sees_persisted_habits() {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    {
        let repo = HabitRepository::new(SqliteStore::new(db_path.clone()).unwrap());
        repo.add_habit(&Habit::new("Reading", "One chapter", Schedule::Weekly))
            .unwrap();
    }

    let repo = HabitRepository::new(SqliteStore::new(db_path).unwrap());
    let result = repo.add_habit(&Habit::new("READING", "", Schedule::Daily));
    assert!(result.is_err());
}
