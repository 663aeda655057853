//! Schedule statistics.
//!
//! Read-only aggregation over a finished run.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled rate | scheduled / total students × 100 |
//! | Room capacity | rooms × total slots |
//! | Room utilization | used (room, slot) pairs / capacity × 100 |
//! | Peak daily load | highest roles held by one professor on one day |
//!
//! Percentages are 0 when their denominator is 0.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{RoomFreeSlots, ScheduleOutcome, UnscheduledReason};

/// Aggregate figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStats {
    pub total_students: usize,
    pub scheduled_students: usize,
    pub unscheduled_students: usize,
    /// Unscheduled because the supervisor reference did not resolve.
    pub missing_supervisor: usize,
    /// Unscheduled because no combination satisfied the constraints.
    pub constraints_exhausted: usize,
    /// Scheduled by the primary pass.
    pub scheduled_primary: usize,
    /// Scheduled by the relaxed pass.
    pub scheduled_relaxed: usize,
    /// Scheduled share of all students (0..=100).
    pub scheduled_rate: f64,
    /// Total (room, slot) pairs.
    pub room_capacity: usize,
    /// Occupied (room, slot) pairs.
    pub used_room_slots: usize,
    /// Free (room, slot) pairs.
    pub available_room_slots: usize,
    /// Occupied share of capacity (0..=100).
    pub room_utilization: f64,
    /// Jury roles per professor over the run.
    pub roles_by_professor: BTreeMap<String, u32>,
    /// Highest daily role count reached by any professor.
    pub peak_daily_load: u32,
}

impl ScheduleStats {
    /// Computes statistics from a finished run.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let total_students = outcome.student_count;
        let scheduled_students = outcome.scheduled_count();
        let rooms = outcome.state.rooms();
        let room_capacity = rooms.capacity();
        let used_room_slots = rooms.used_count();
        let workload = outcome.state.workload();

        Self {
            total_students,
            scheduled_students,
            unscheduled_students: outcome.unscheduled.len(),
            missing_supervisor: outcome.unscheduled_count(UnscheduledReason::MissingSupervisor),
            constraints_exhausted: outcome
                .unscheduled_count(UnscheduledReason::ConstraintsExhausted),
            scheduled_primary: outcome.primary_count,
            scheduled_relaxed: outcome.relaxed_count(),
            scheduled_rate: percentage(scheduled_students, total_students),
            room_capacity,
            used_room_slots,
            available_room_slots: room_capacity.saturating_sub(used_room_slots),
            room_utilization: percentage(used_room_slots, room_capacity),
            roles_by_professor: workload.totals().clone(),
            peak_daily_load: workload.peak_daily_count(),
        }
    }

    /// Whether every student got a defense.
    pub fn is_complete(&self) -> bool {
        self.unscheduled_students == 0
    }

    /// Free slots per room, grouped by day.
    pub fn free_room_slots(outcome: &ScheduleOutcome) -> Vec<RoomFreeSlots> {
        outcome.state.rooms().free_slots_by_room()
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::models::{Level, Professor, Rank, Room, Student};
    use crate::scheduler::{DefenseScheduler, ScheduleRequest};

    fn run(request: &ScheduleRequest) -> ScheduleOutcome {
        DefenseScheduler::new(SchedulerConfig::new().with_horizon(1, 2))
            .unwrap()
            .schedule(request)
            .unwrap()
    }

    fn panel() -> Vec<Professor> {
        vec![
            Professor::new("P1", Rank(1)).with_availability(0..2),
            Professor::new("P2", Rank(3)).with_availability(0..2),
            Professor::new("P3", Rank(2))
                .with_specialty("AI")
                .with_availability(0..2),
        ]
    }

    #[test]
    fn test_stats_basic() {
        let request = ScheduleRequest::new(
            panel(),
            vec![
                Student::new("S1", Level::Master, "AI", "P1"),
                Student::new("S2", Level::Master, "AI", "nobody"),
            ],
            vec![Room::new("R1"), Room::new("R2")],
        );
        let outcome = run(&request);
        let stats = ScheduleStats::calculate(&outcome);

        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.scheduled_students, 1);
        assert_eq!(stats.unscheduled_students, 1);
        assert_eq!(stats.missing_supervisor, 1);
        assert_eq!(stats.constraints_exhausted, 0);
        assert_eq!(stats.scheduled_primary, 1);
        assert_eq!(stats.scheduled_relaxed, 0);
        assert!((stats.scheduled_rate - 50.0).abs() < 1e-10);
        assert_eq!(stats.room_capacity, 4);
        assert_eq!(stats.used_room_slots, 1);
        assert_eq!(stats.available_room_slots, 3);
        assert!((stats.room_utilization - 25.0).abs() < 1e-10);
        assert_eq!(stats.roles_by_professor["P3"], 1);
        assert_eq!(stats.peak_daily_load, 1);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_stats_no_students() {
        let request = ScheduleRequest::new(panel(), vec![], vec![Room::new("R1")]);
        let stats = ScheduleStats::calculate(&run(&request));
        assert_eq!(stats.total_students, 0);
        assert!((stats.scheduled_rate - 0.0).abs() < 1e-10);
        assert!((stats.room_utilization - 0.0).abs() < 1e-10);
        assert!(stats.is_complete());
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_free_room_slots() {
        let request = ScheduleRequest::new(
            panel(),
            vec![Student::new("S1", Level::Master, "AI", "P1")],
            vec![Room::new("R1"), Room::new("R2")],
        );
        let outcome = run(&request);
        let free = ScheduleStats::free_room_slots(&outcome);
        assert_eq!(free.len(), 2);
        assert_eq!(free[0].room_id, "R1");
        assert_eq!(free[0].by_day[&0], vec![1]);
        assert_eq!(free[1].by_day[&0], vec![0, 1]);
    }
}
