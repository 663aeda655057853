//! Defense scheduling domain models.
//!
//! Entities are immutable once loaded. The only mutable data during a run
//! lives in [`ScheduleState`](crate::scheduler::ScheduleState).
//!
//! # Time Model
//! Slots are indexed globally across days: `slot = day * slots_per_day +
//! slot_in_day`. See [`Horizon`](crate::availability::Horizon).

mod defense;
mod professor;
mod rank;
mod room;
mod student;

pub use defense::Defense;
pub use professor::Professor;
pub use rank::{Rank, RankScale};
pub use room::Room;
pub use student::{Level, Student};

/// Global slot index.
pub type Slot = usize;
