//! Room occupancy per slot.
//!
//! Rooms are interchangeable, so allocation is a linear scan in the
//! configured order: the first room free at a slot wins.

use std::collections::BTreeMap;

use crate::availability::Horizon;
use crate::models::{Room, Slot};

/// Per-room, per-slot occupancy.
#[derive(Debug, Clone)]
pub struct RoomAllocator {
    horizon: Horizon,
    rooms: Vec<Room>,
    /// `occupancy[room][slot]` holds the student defending there.
    occupancy: Vec<Vec<Option<String>>>,
}

/// Free slots of one room, grouped by day (slot-in-day positions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomFreeSlots {
    pub room_id: String,
    pub by_day: BTreeMap<usize, Vec<usize>>,
}

impl RoomAllocator {
    /// Creates an allocator with every (room, slot) free.
    pub fn new(rooms: Vec<Room>, horizon: Horizon) -> Self {
        let occupancy = vec![vec![None; horizon.total_slots()]; rooms.len()];
        Self {
            horizon,
            rooms,
            occupancy,
        }
    }

    /// Configured rooms in scan order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// First room free at a slot.
    pub fn first_free_room(&self, slot: Slot) -> Option<&Room> {
        self.free_rooms(slot).next()
    }

    /// Rooms free at a slot, in scan order.
    pub fn free_rooms(&self, slot: Slot) -> impl Iterator<Item = &Room> + '_ {
        self.rooms
            .iter()
            .zip(&self.occupancy)
            .filter(move |(_, slots)| matches!(slots.get(slot), Some(None)))
            .map(|(room, _)| room)
    }

    /// Whether a room is free at a slot. Unknown rooms and out-of-horizon
    /// slots are never free.
    pub fn is_free(&self, room_id: &str, slot: Slot) -> bool {
        self.index_of(room_id)
            .is_some_and(|i| matches!(self.occupancy[i].get(slot), Some(None)))
    }

    /// Marks a room occupied at a slot by a student.
    ///
    /// Returns `false` and changes nothing if the room is unknown, the slot
    /// lies outside the horizon, or the room is already taken.
    pub fn commit(&mut self, room_id: &str, slot: Slot, student_id: &str) -> bool {
        let Some(i) = self.index_of(room_id) else {
            return false;
        };
        match self.occupancy[i].get_mut(slot) {
            Some(cell) if cell.is_none() => {
                *cell = Some(student_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Student defending in a room at a slot.
    pub fn occupant(&self, room_id: &str, slot: Slot) -> Option<&str> {
        let i = self.index_of(room_id)?;
        self.occupancy[i].get(slot)?.as_deref()
    }

    /// Total (room, slot) pairs.
    pub fn capacity(&self) -> usize {
        self.rooms.len() * self.horizon.total_slots()
    }

    /// Occupied (room, slot) pairs.
    pub fn used_count(&self) -> usize {
        self.occupancy
            .iter()
            .map(|slots| slots.iter().filter(|s| s.is_some()).count())
            .sum()
    }

    /// Slots that still have at least one free room, ascending.
    pub fn slots_with_free_room(&self) -> Vec<Slot> {
        self.horizon
            .slots()
            .filter(|&slot| self.first_free_room(slot).is_some())
            .collect()
    }

    /// Free slots per room, grouped by day. Rooms with no free slot are
    /// omitted.
    pub fn free_slots_by_room(&self) -> Vec<RoomFreeSlots> {
        self.rooms
            .iter()
            .zip(&self.occupancy)
            .filter_map(|(room, slots)| {
                let mut by_day: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
                for (slot, cell) in slots.iter().enumerate() {
                    if cell.is_none() {
                        by_day
                            .entry(self.horizon.day_of(slot))
                            .or_default()
                            .push(self.horizon.slot_in_day(slot));
                    }
                }
                (!by_day.is_empty()).then(|| RoomFreeSlots {
                    room_id: room.id.clone(),
                    by_day,
                })
            })
            .collect()
    }

    fn index_of(&self, room_id: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == room_id)
    }
}
