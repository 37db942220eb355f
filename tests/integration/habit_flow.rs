/// End-to-end habit lifecycle against a real database file
use habit_tracker::{Habit, HabitController, HabitRepository, Schedule, SqliteStore};
use tempfile::NamedTempFile;

fn open_store(file: &NamedTempFile) -> SqliteStore {
    SqliteStore::new(file.path().to_path_buf()).expect("failed to open store")
}

#[test]
fn test_full_habit_lifecycle() {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let repo = HabitRepository::new(open_store(&temp_file));
    let today = chrono::Utc::now().date_naive();

    // Add a habit and read it back
    repo.add_habit(&Habit::new("Exercise", "Daily workout", Schedule::Daily))
        .expect("add failed");

    let habits = repo.get_habits().expect("fetch failed");
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Exercise");
    assert_eq!(habits[0].description, "Daily workout");
    assert_eq!(habits[0].schedule, Schedule::Daily);
    assert!(!habits[0].created_at_display().is_empty());

    // A second add with different casing is rejected
    let err = repo
        .add_habit(&Habit::new("exercise", "Evening yoga", Schedule::Weekly))
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(repo.get_habits().unwrap().len(), 1);

    // Mark done today, then the daily window counts exactly one event
    repo.log_event("Exercise", today).expect("log failed");
    assert_eq!(
        repo.calculate_streak("Exercise", Schedule::Daily).unwrap(),
        1
    );

    // Delete removes the habit and its history
    repo.delete_habit("Exercise").expect("delete failed");
    assert!(repo.get_habits().unwrap().is_empty());
    assert_eq!(repo.calculate_all_time_streak("Exercise").unwrap(), 0);
}

#[test]
fn test_controller_flow_absorbs_errors() {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let controller = HabitController::new(open_store(&temp_file));

    controller.add_habit("Exercise", "Daily workout", "Daily");
    controller.add_habit("EXERCISE", "duplicate in different casing", "weekly");
    controller.add_habit("  ", "empty name", "daily");
    controller.add_habit("Stretch", "short break", "hourly");

    // Only the first add survives: duplicate, empty, and bad-schedule adds
    // were reported and abandoned without touching the store
    let habits = controller.get_all_habits();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Exercise");

    controller.mark_done("Exercise");
    assert_eq!(controller.calculate_streak("Exercise", "daily"), 1);
    assert_eq!(controller.calculate_all_time_streak("Exercise"), 1);
}

#[test]
fn test_rename_detaches_logged_events() {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let repo = HabitRepository::new(open_store(&temp_file));
    let today = chrono::Utc::now().date_naive();

    repo.add_habit(&Habit::new("Exercise", "Daily workout", Schedule::Daily))
        .unwrap();
    repo.log_event("Exercise", today).unwrap();

    // Events reference the habit by name, so the history stays under the
    // old name after a rename
    repo.edit_habit("Exercise", "Workout", "Daily workout", Schedule::Daily)
        .unwrap();

    assert_eq!(repo.calculate_all_time_streak("Workout").unwrap(), 0);
    assert_eq!(repo.calculate_all_time_streak("Exercise").unwrap(), 1);
}

#[test]
fn test_clear_all_habits_empties_everything() {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let repo = HabitRepository::new(open_store(&temp_file));
    let today = chrono::Utc::now().date_naive();

    repo.add_habit(&Habit::new("Exercise", "Fitness", Schedule::Daily))
        .unwrap();
    repo.add_habit(&Habit::new("Meditation", "Focus", Schedule::Weekly))
        .unwrap();
    repo.log_event("Exercise", today).unwrap();

    repo.clear_all_habits().unwrap();

    assert!(repo.get_habits().unwrap().is_empty());
    assert_eq!(repo.calculate_all_time_streak("Exercise").unwrap(), 0);
}
