/// Public library interface for the habit tracker
///
/// This module exports the domain types, storage implementation, repository,
/// and controller so the binary and the integration tests share one surface.

use thiserror::Error;

// Internal modules
mod controller;
mod domain;
mod repository;
mod storage;

// Re-export public modules and types
pub use controller::HabitController;
pub use domain::{DomainError, Habit, Schedule};
pub use repository::{HabitRepository, RepositoryError};
pub use storage::{HabitStore, SqliteStore, StorageError};

/// Errors that can occur before the controller takes over, i.e. while the
/// process is still setting up its storage
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
