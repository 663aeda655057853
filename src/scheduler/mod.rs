//! Defense scheduling engine and run statistics.
//!
//! Provides the greedy two-pass scheduler, the per-run mutable state it
//! commits into, and read-only statistics over a finished run.
//!
//! # Algorithm
//!
//! `DefenseScheduler` is a deterministic, non-backtracking greedy
//! allocator: a primary pass under full constraints, then an optional
//! relaxed pass that lets any professor examine. It does not search for a
//! maximum assignment.
//!
//! # Statistics
//!
//! `ScheduleStats` reports scheduled/unscheduled counts (split by reason),
//! room utilization, and professor workload.

mod engine;
mod rooms;
mod state;
mod stats;
mod workload;

pub use engine::{
    DefenseScheduler, ScheduleOutcome, ScheduleRequest, Unscheduled, UnscheduledReason,
};
pub use rooms::{RoomAllocator, RoomFreeSlots};
pub use state::ScheduleState;
pub use stats::ScheduleStats;
pub use workload::WorkloadTracker;
