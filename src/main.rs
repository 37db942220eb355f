/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, opens the
/// database (creating the schema if absent), and routes each subcommand to
/// the controller.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_tracker::{AppError, Habit, HabitController, SqliteStore};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, AppError> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Free-text description
        #[arg(default_value = "")]
        description: String,
        /// Recurrence schedule: daily, weekly, or monthly
        #[arg(default_value = "daily")]
        schedule: String,
    },
    /// Edit an existing habit; omitted fields keep their current values
    Edit {
        /// Current habit name
        name: String,
        /// New name
        #[arg(long)]
        new_name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New schedule: daily, weekly, or monthly
        #[arg(long)]
        schedule: Option<String>,
    },
    /// Delete a habit and its logged completions
    Delete {
        /// Habit name
        name: String,
    },
    /// Delete every habit and all logged completions
    Clear,
    /// List habits, optionally filtered by schedule
    List {
        /// Only habits with this schedule: daily, weekly, or monthly
        #[arg(long)]
        schedule: Option<String>,
        /// Print the habits as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mark a habit as completed for today
    Done {
        /// Habit name
        name: String,
    },
    /// Show the streak count for a habit within a trailing window
    Streak {
        /// Habit name
        name: String,
        /// Window: daily (today), weekly (last 7 days), monthly (last 30 days)
        #[arg(default_value = "daily")]
        window: String,
    },
    /// Show the total number of completions ever logged for a habit
    Total {
        /// Habit name
        name: String,
    },
}

/// Render habits as plain-text lines
fn print_habits(habits: &[Habit]) {
    if habits.is_empty() {
        println!("No habits found.");
        return;
    }

    for habit in habits {
        println!(
            "{} [{}] - {} (created {})",
            habit.name,
            habit.schedule,
            habit.description,
            habit.created_at_display()
        );
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for user-facing output
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    // Open the store (runs migrations) and hand control to the controller
    let store = SqliteStore::new(db_path)?;
    let controller = HabitController::new(store);

    match args.command {
        Command::Add {
            name,
            description,
            schedule,
        } => controller.add_habit(&name, &description, &schedule),
        Command::Edit {
            name,
            new_name,
            description,
            schedule,
        } => controller.edit_habit(
            &name,
            new_name.as_deref(),
            description.as_deref(),
            schedule.as_deref(),
        ),
        Command::Delete { name } => controller.delete_habit(&name),
        Command::Clear => controller.clear_all_habits(),
        Command::List { schedule, json } => {
            let habits = match schedule {
                Some(schedule) => controller.get_habits_by_schedule(&schedule),
                None => controller.get_all_habits(),
            };
            if json {
                match serde_json::to_string_pretty(&habits) {
                    Ok(out) => println!("{}", out),
                    Err(e) => println!("Error: {}", e),
                }
            } else {
                print_habits(&habits);
            }
        }
        Command::Done { name } => controller.mark_done(&name),
        Command::Streak { name, window } => {
            let count = controller.calculate_streak(&name, &window);
            println!("Current {} streak for '{}': {}", window.trim(), name.trim(), count);
        }
        Command::Total { name } => {
            let count = controller.calculate_all_time_streak(&name);
            println!("All-time completions for '{}': {}", name.trim(), count);
        }
    }

    Ok(())
}
