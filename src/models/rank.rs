//! Academic rank model.
//!
//! Institutions use different rank vocabularies, so the engine only sees an
//! ordered integer. Callers map their own rank names through a [`RankScale`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered professor seniority. Higher value = more authority.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rank(pub u32);

impl Rank {
    /// Creates a rank from its ordinal value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The ordinal value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally supplied mapping from rank names to ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankScale {
    ranks: BTreeMap<String, Rank>,
}

impl RankScale {
    /// Creates an empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named rank.
    pub fn with_rank(mut self, name: impl Into<String>, value: u32) -> Self {
        self.ranks.insert(name.into(), Rank(value));
        self
    }

    /// Looks up a rank by name.
    pub fn resolve(&self, name: &str) -> Option<Rank> {
        self.ranks.get(name).copied()
    }

    /// Name of a rank value, if the scale knows it.
    pub fn name_of(&self, rank: Rank) -> Option<&str> {
        self.ranks
            .iter()
            .find(|(_, &r)| r == rank)
            .map(|(name, _)| name.as_str())
    }

    /// Lowest rank on the scale.
    pub fn lowest(&self) -> Option<Rank> {
        self.ranks.values().min().copied()
    }

    /// Highest rank on the scale.
    pub fn highest(&self) -> Option<Rank> {
        self.ranks.values().max().copied()
    }

    /// Distinct rank values in ascending order.
    pub fn values(&self) -> Vec<Rank> {
        let mut values: Vec<Rank> = self.ranks.values().copied().collect();
        values.sort();
        values.dedup();
        values
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scale() -> RankScale {
        RankScale::new()
            .with_rank("Assistant", 1)
            .with_rank("Lecturer", 2)
            .with_rank("Professor", 3)
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank(3) > Rank(2));
        assert_eq!(Rank::new(2).value(), 2);
    }

    #[test]
    fn test_scale_resolve() {
        let scale = sample_scale();
        assert_eq!(scale.resolve("Lecturer"), Some(Rank(2)));
        assert_eq!(scale.resolve("Dean"), None);
        assert_eq!(scale.name_of(Rank(3)), Some("Professor"));
    }

    #[test]
    fn test_scale_bounds() {
        let scale = sample_scale();
        assert_eq!(scale.lowest(), Some(Rank(1)));
        assert_eq!(scale.highest(), Some(Rank(3)));
        assert_eq!(scale.values(), vec![Rank(1), Rank(2), Rank(3)]);
        assert!(RankScale::new().lowest().is_none());
    }

    #[test]
    fn test_aliases_share_value() {
        let scale = RankScale::new()
            .with_rank("MA", 3)
            .with_rank("MC", 3)
            .with_rank("Docteur", 2);
        assert_eq!(scale.len(), 3);
        assert_eq!(scale.values(), vec![Rank(2), Rank(3)]);
    }
}
