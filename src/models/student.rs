//! Student model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A student awaiting a defense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Degree level; sets the minimum president rank.
    pub level: Level,
    /// Specialty tag matched against examiner specialties.
    pub field: String,
    /// Professor id of the supervisor.
    pub supervisor_id: String,
}

/// Degree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Licence,
    Master,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Licence => f.write_str("Licence"),
            Level::Master => f.write_str("Master"),
        }
    }
}

impl Student {
    /// Creates a student.
    pub fn new(
        id: impl Into<String>,
        level: Level,
        field: impl Into<String>,
        supervisor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            level,
            field: field.into(),
            supervisor_id: supervisor_id.into(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
