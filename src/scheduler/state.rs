//! Mutable state of one scheduling run.
//!
//! Owned by a single run and discarded afterwards. Eligibility checks read
//! it; only [`ScheduleState::commit`] writes it.

use std::collections::BTreeSet;

use super::rooms::RoomAllocator;
use super::workload::WorkloadTracker;
use crate::availability::Horizon;
use crate::models::{Defense, Room, Slot};

/// Professor workload, room occupancy, and the scheduled-student set.
#[derive(Debug, Clone)]
pub struct ScheduleState {
    horizon: Horizon,
    workload: WorkloadTracker,
    rooms: RoomAllocator,
    scheduled: BTreeSet<String>,
}

impl ScheduleState {
    /// Creates an empty state.
    pub fn new(rooms: Vec<Room>, horizon: Horizon) -> Self {
        Self {
            horizon,
            workload: WorkloadTracker::new(horizon),
            rooms: RoomAllocator::new(rooms, horizon),
            scheduled: BTreeSet::new(),
        }
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn workload(&self) -> &WorkloadTracker {
        &self.workload
    }

    pub fn rooms(&self) -> &RoomAllocator {
        &self.rooms
    }

    /// Ids of scheduled students, ordered.
    pub fn scheduled(&self) -> &BTreeSet<String> {
        &self.scheduled
    }

    pub fn is_scheduled(&self, student_id: &str) -> bool {
        self.scheduled.contains(student_id)
    }

    /// Whether a professor can take one more role at `slot` under `cap`:
    /// not already sitting in that slot and below the cap for its day.
    pub fn has_capacity(&self, professor_id: &str, slot: Slot, cap: u32) -> bool {
        !self.workload.is_occupied(professor_id, slot)
            && self.workload.daily_count_at(professor_id, slot) < cap
    }

    /// Records a defense: room, all three jury members, and the student.
    ///
    /// Returns `false` and records nothing if the room is already taken.
    pub(crate) fn commit(&mut self, defense: &Defense) -> bool {
        if !self
            .rooms
            .commit(&defense.room_id, defense.slot, &defense.student_id)
        {
            return false;
        }
        for professor_id in defense.jury() {
            self.workload.commit(professor_id, defense.slot);
        }
        self.scheduled.insert(defense.student_id.clone());
        true
    }
}
