//! Professor model.
//!
//! Professors fill every jury role. Each carries a rank, a set of
//! specialty tags, and the set of slots in which they can sit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Rank, Slot};
use crate::availability::{slots_from_grid, Horizon};
use crate::error::AvailabilityError;

/// A jury member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    /// Unique professor identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Seniority on the caller's rank scale.
    pub rank: Rank,
    /// Specialty tags matched against student fields.
    pub specialties: BTreeSet<String>,
    /// Feasible slot indices.
    pub availability: BTreeSet<Slot>,
}

impl Professor {
    /// Creates a professor with no specialties and no availability.
    pub fn new(id: impl Into<String>, rank: Rank) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rank,
            specialties: BTreeSet::new(),
            availability: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a specialty tag.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialties.insert(specialty.into());
        self
    }

    /// Adds available slots.
    pub fn with_availability(mut self, slots: impl IntoIterator<Item = Slot>) -> Self {
        self.availability.extend(slots);
        self
    }

    /// Replaces availability with the `true` cells of a day-by-slot grid.
    pub fn with_availability_grid(
        mut self,
        grid: &[Vec<bool>],
        horizon: Horizon,
    ) -> Result<Self, AvailabilityError> {
        self.availability = slots_from_grid(grid, horizon)?;
        Ok(self)
    }

    /// Whether this professor covers a field.
    pub fn has_specialty(&self, field: &str) -> bool {
        self.specialties.contains(field)
    }

    /// Whether this professor can sit in a slot.
    #[inline]
    pub fn is_available_at(&self, slot: Slot) -> bool {
        self.availability.contains(&slot)
    }
}
