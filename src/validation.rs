//! Input validation for defense scheduling.
//!
//! Checks structural integrity of professors, students, and rooms before
//! scheduling. Detects:
//! - Duplicate IDs
//! - Supervisor references that match no professor
//! - Availability slots outside the configured horizon
//! - Students whose field no professor covers
//!
//! Findings are diagnostics. The scheduler logs them and still runs; a
//! student with an unknown supervisor is simply left unscheduled.

use std::collections::HashSet;

use crate::availability::Horizon;
use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A student's supervisor id matches no professor.
    UnknownSupervisor,
    /// A professor lists a slot past the end of the horizon.
    SlotOutOfHorizon,
    /// No professor other than the supervisor covers a student's field.
    NoSpecialtyExaminer,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a scheduling run.
///
/// Checks:
/// 1. No duplicate professor, student, or room IDs
/// 2. Every supervisor reference resolves to a professor
/// 3. Every availability slot lies inside the horizon
/// 4. Every student's field is covered by some professor other than the
///    supervisor (otherwise only the relaxed pass can place them)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(request: &ScheduleRequest, horizon: Horizon) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in &request.professors {
        if !professor_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate professor ID: {}", p.id),
            ));
        }
        if let Some(&slot) = p.availability.iter().find(|&&s| !horizon.contains(s)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotOutOfHorizon,
                format!(
                    "Professor '{}' is available at slot {} but the horizon has {} slots",
                    p.id,
                    slot,
                    horizon.total_slots()
                ),
            ));
        }
    }

    let mut student_ids = HashSet::new();
    for s in &request.students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
        if !professor_ids.contains(s.supervisor_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSupervisor,
                format!(
                    "Student '{}' references unknown supervisor '{}'",
                    s.id, s.supervisor_id
                ),
            ));
        }
        let covered = request
            .professors
            .iter()
            .any(|p| p.id != s.supervisor_id && p.has_specialty(&s.field));
        if !covered {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSpecialtyExaminer,
                format!("No examiner covers field '{}' of student '{}'", s.field, s.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &request.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
