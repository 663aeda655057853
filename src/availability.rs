//! Availability model.
//!
//! Maps each professor to the set of slots they can sit in. Built once per
//! run and read-only afterwards. A professor id the model does not know is
//! available nowhere.
//!
//! # Grid Format
//! Source data records availability as `num_days` rows of `slots_per_day`
//! booleans. [`slots_from_grid`] flattens a grid into slot indices after
//! checking its shape.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::AvailabilityError;
use crate::models::{Professor, Slot};

/// Scheduling horizon: number of days and slots per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub num_days: usize,
    pub slots_per_day: usize,
}

impl Horizon {
    /// Creates a horizon.
    pub const fn new(num_days: usize, slots_per_day: usize) -> Self {
        Self {
            num_days,
            slots_per_day,
        }
    }

    /// Total number of slots.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.num_days * self.slots_per_day
    }

    /// Day containing a slot.
    #[inline]
    pub fn day_of(&self, slot: Slot) -> usize {
        slot / self.slots_per_day
    }

    /// Position of a slot within its day.
    #[inline]
    pub fn slot_in_day(&self, slot: Slot) -> usize {
        slot % self.slots_per_day
    }

    /// Global index of `slot_in_day` on `day`.
    #[inline]
    pub fn slot(&self, day: usize, slot_in_day: usize) -> Slot {
        day * self.slots_per_day + slot_in_day
    }

    /// Whether a slot falls inside the horizon.
    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        slot < self.total_slots()
    }

    /// All slots in increasing order.
    pub fn slots(&self) -> std::ops::Range<Slot> {
        0..self.total_slots()
    }
}

/// Flattens a day-by-slot availability grid into slot indices.
///
/// The grid must have exactly `horizon.num_days` rows of exactly
/// `horizon.slots_per_day` cells.
pub fn slots_from_grid(
    grid: &[Vec<bool>],
    horizon: Horizon,
) -> Result<BTreeSet<Slot>, AvailabilityError> {
    if grid.len() != horizon.num_days {
        return Err(AvailabilityError::DayCount {
            expected: horizon.num_days,
            found: grid.len(),
        });
    }

    let mut slots = BTreeSet::new();
    for (day, cells) in grid.iter().enumerate() {
        if cells.len() != horizon.slots_per_day {
            return Err(AvailabilityError::SlotCount {
                day,
                expected: horizon.slots_per_day,
                found: cells.len(),
            });
        }
        slots.extend(
            cells
                .iter()
                .enumerate()
                .filter(|(_, &free)| free)
                .map(|(i, _)| horizon.slot(day, i)),
        );
    }
    Ok(slots)
}

/// Per-professor feasible slots.
#[derive(Debug, Clone, Default)]
pub struct Availability {
    slots: HashMap<String, BTreeSet<Slot>>,
}

impl Availability {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the model from professor records. On duplicate ids the first
    /// record wins.
    pub fn from_professors(professors: &[Professor]) -> Self {
        let mut slots = HashMap::with_capacity(professors.len());
        for prof in professors {
            slots
                .entry(prof.id.clone())
                .or_insert_with(|| prof.availability.clone());
        }
        Self { slots }
    }

    /// Sets the slots for one professor.
    pub fn with_professor(
        mut self,
        professor_id: impl Into<String>,
        slots: impl IntoIterator<Item = Slot>,
    ) -> Self {
        self.slots
            .insert(professor_id.into(), slots.into_iter().collect());
        self
    }

    /// Whether a professor can sit in a slot.
    pub fn is_available(&self, professor_id: &str, slot: Slot) -> bool {
        self.slots
            .get(professor_id)
            .is_some_and(|set| set.contains(&slot))
    }

    /// Number of slots a professor can sit in.
    pub fn slot_count(&self, professor_id: &str) -> usize {
        self.slots.get(professor_id).map_or(0, BTreeSet::len)
    }
}
