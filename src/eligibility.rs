//! Jury eligibility predicates.
//!
//! Stateless checks over immutable entities and a read-only
//! [`ScheduleState`]. A professor is *free* at a slot when the availability
//! model lists the slot, they do not already sit in it, and their count for
//! that day is below the cap of the current pass.
//!
//! | Role | Extra conditions |
//! |------|------------------|
//! | Supervisor | none |
//! | President | rank ≥ level minimum, rank not excluded, not the supervisor, optionally rank ≥ supervisor rank |
//! | Examiner | covers the student's field (unless relaxed), not supervisor, not president |

use crate::availability::Availability;
use crate::config::PresidencyPolicy;
use crate::models::{Professor, Slot, Student};
use crate::scheduler::ScheduleState;

/// Rules that differ between the primary and the relaxed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRules {
    /// Maximum roles per professor per day.
    pub daily_cap: u32,
    /// Whether the examiner must cover the student's field.
    pub examiner_specialty_required: bool,
}

/// Eligibility evaluator bound to one pass.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    availability: &'a Availability,
    presidency: &'a PresidencyPolicy,
    rules: PassRules,
}

impl<'a> Eligibility<'a> {
    /// Creates an evaluator.
    pub fn new(
        availability: &'a Availability,
        presidency: &'a PresidencyPolicy,
        rules: PassRules,
    ) -> Self {
        Self {
            availability,
            presidency,
            rules,
        }
    }

    /// Rules of the pass this evaluator serves.
    pub fn rules(&self) -> PassRules {
        self.rules
    }

    /// Available, not yet sitting in `slot`, and under the daily cap.
    pub fn is_free(&self, professor_id: &str, slot: Slot, state: &ScheduleState) -> bool {
        self.availability.is_available(professor_id, slot)
            && state.has_capacity(professor_id, slot, self.rules.daily_cap)
    }

    /// Whether the supervisor can attend a defense at `slot`.
    pub fn can_supervise(&self, supervisor: &Professor, slot: Slot, state: &ScheduleState) -> bool {
        self.is_free(&supervisor.id, slot, state)
    }

    /// Whether a professor can chair the student's jury at `slot`.
    pub fn can_chair(
        &self,
        professor: &Professor,
        student: &Student,
        supervisor: &Professor,
        slot: Slot,
        state: &ScheduleState,
    ) -> bool {
        self.rank_may_chair(professor, student, supervisor)
            && professor.id != student.supervisor_id
            && professor.id != supervisor.id
            && self.is_free(&professor.id, slot, state)
    }

    /// Whether a professor can examine the student at `slot`, given the
    /// already chosen president and supervisor.
    pub fn can_examine(
        &self,
        professor: &Professor,
        student: &Student,
        president_id: &str,
        supervisor_id: &str,
        slot: Slot,
        state: &ScheduleState,
    ) -> bool {
        (!self.rules.examiner_specialty_required || professor.has_specialty(&student.field))
            && professor.id != supervisor_id
            && professor.id != president_id
            && self.is_free(&professor.id, slot, state)
    }

    /// Rank-only part of the presidency check.
    pub fn rank_may_chair(
        &self,
        professor: &Professor,
        student: &Student,
        supervisor: &Professor,
    ) -> bool {
        let policy = self.presidency;
        professor.rank >= policy.min_rank_for(student.level)
            && policy.excluded_rank != Some(professor.rank)
            && (!policy.must_outrank_supervisor || professor.rank >= supervisor.rank)
    }
}
