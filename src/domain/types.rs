/// Core types used throughout the domain layer
///
/// This module defines the Schedule enum shared by habits (how often the
/// habit recurs) and streak queries (which trailing window to count).

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// How often a habit recurs
///
/// The same three values double as the streak window selector: daily counts
/// events dated today, weekly the trailing 7 days, monthly the trailing 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Every day
    Daily,
    /// Once a week
    Weekly,
    /// Once a month
    Monthly,
}

impl Schedule {
    /// Database / display representation, always lowercase
    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Daily => "daily",
            Schedule::Weekly => "weekly",
            Schedule::Monthly => "monthly",
        }
    }
}

impl FromStr for Schedule {
    type Err = DomainError;

    /// Parse a schedule from user or database text, ignoring case and
    /// surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Schedule::Daily),
            "weekly" => Ok(Schedule::Weekly),
            "monthly" => Ok(Schedule::Monthly),
            other => Err(DomainError::InvalidSchedule(other.to_string())),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
