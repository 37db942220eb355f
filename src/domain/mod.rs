/// Domain module containing the core entity and value types
///
/// This module defines the Habit entity and the Schedule enum along with
/// the errors that can come out of parsing domain values.

pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid schedule '{0}': expected daily, weekly, or monthly")]
    InvalidSchedule(String),
}
