//! Error types.
//!
//! Only configuration and input-shape problems are errors. A student that
//! cannot be placed is a normal outcome and is reported through
//! [`UnscheduledReason`](crate::scheduler::UnscheduledReason) instead.

use thiserror::Error;

/// Fatal configuration problems, raised before any scheduling pass runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("daily cap must be at least 1")]
    ZeroDailyCap,

    #[error("relaxed daily cap must be at least 1")]
    ZeroRelaxedDailyCap,

    #[error("number of days must be at least 1")]
    ZeroDays,

    #[error("slots per day must be at least 1")]
    ZeroSlotsPerDay,

    #[error("at least one room is required")]
    NoRooms,
}

/// A malformed availability grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("expected {expected} days of availability, found {found}")]
    DayCount { expected: usize, found: usize },

    #[error("day {day}: expected {expected} slots, found {found}")]
    SlotCount {
        day: usize,
        expected: usize,
        found: usize,
    },
}

/// Failures while loading a problem document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read problem file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse problem JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown rank '{0}'")]
    UnknownRank(String),

    #[error("professor '{professor}': {source}")]
    Availability {
        professor: String,
        #[source]
        source: AvailabilityError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
