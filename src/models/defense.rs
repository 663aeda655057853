//! Defense (assignment) model.
//!
//! A defense binds one student to a slot, a room, and a three-person jury.
//! Created once when the scheduler commits and never changed afterwards.

use serde::{Deserialize, Serialize};

use super::Slot;

/// A committed thesis defense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defense {
    /// Scheduled student.
    pub student_id: String,
    /// Global slot index.
    pub slot: Slot,
    /// Hosting room.
    pub room_id: String,
    /// Jury president.
    pub president_id: String,
    /// Jury examiner.
    pub examiner_id: String,
    /// Student's supervisor.
    pub supervisor_id: String,
}

impl Defense {
    /// Jury members as `[supervisor, president, examiner]`.
    pub fn jury(&self) -> [&str; 3] {
        [
            self.supervisor_id.as_str(),
            self.president_id.as_str(),
            self.examiner_id.as_str(),
        ]
    }

    /// Whether a professor sits on this jury in any role.
    pub fn involves(&self, professor_id: &str) -> bool {
        self.jury().contains(&professor_id)
    }
}
