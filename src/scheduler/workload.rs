//! Per-professor workload accounting.
//!
//! Tracks which slots each professor already sits in and how many jury
//! roles they hold per day. Counters only grow within a run.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::availability::Horizon;
use crate::models::Slot;

/// Slot occupancy and daily role counts per professor.
#[derive(Debug, Clone)]
pub struct WorkloadTracker {
    horizon: Horizon,
    occupied: HashMap<String, BTreeSet<Slot>>,
    daily: HashMap<String, Vec<u32>>,
    totals: BTreeMap<String, u32>,
}

impl WorkloadTracker {
    /// Creates an empty tracker for a horizon.
    pub fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            occupied: HashMap::new(),
            daily: HashMap::new(),
            totals: BTreeMap::new(),
        }
    }

    /// Records that a professor sits in a slot.
    ///
    /// Occupies the slot and bumps the counter for the slot's day.
    pub fn commit(&mut self, professor_id: &str, slot: Slot) {
        let day = self.horizon.day_of(slot);
        let num_days = self.horizon.num_days;

        self.occupied
            .entry(professor_id.to_string())
            .or_default()
            .insert(slot);

        let days = self
            .daily
            .entry(professor_id.to_string())
            .or_insert_with(|| vec![0; num_days]);
        if let Some(count) = days.get_mut(day) {
            *count += 1;
        }

        *self.totals.entry(professor_id.to_string()).or_insert(0) += 1;
    }

    /// Roles held by a professor on a day.
    pub fn daily_count(&self, professor_id: &str, day: usize) -> u32 {
        self.daily
            .get(professor_id)
            .and_then(|days| days.get(day))
            .copied()
            .unwrap_or(0)
    }

    /// Roles held by a professor on the day containing `slot`.
    #[inline]
    pub fn daily_count_at(&self, professor_id: &str, slot: Slot) -> u32 {
        self.daily_count(professor_id, self.horizon.day_of(slot))
    }

    /// Whether a professor already sits in a slot.
    pub fn is_occupied(&self, professor_id: &str, slot: Slot) -> bool {
        self.occupied
            .get(professor_id)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Roles held by a professor over the whole run.
    pub fn total_count(&self, professor_id: &str) -> u32 {
        self.totals.get(professor_id).copied().unwrap_or(0)
    }

    /// Roles per professor over the whole run, ordered by id.
    pub fn totals(&self) -> &BTreeMap<String, u32> {
        &self.totals
    }

    /// Highest daily count any professor reached.
    pub fn peak_daily_count(&self) -> u32 {
        self.daily
            .values()
            .flat_map(|days| days.iter().copied())
            .max()
            .unwrap_or(0)
    }
}
