//! Scheduler configuration.
//!
//! Institutions differ on presidency rules, workload caps, and how far the
//! fallback pass may relax constraints. Every such rule is an explicit field
//! here rather than a separate code path.
//!
//! All fields have defaults so a partial JSON document deserializes:
//!
//! ```
//! use defense_schedule::config::{SchedulerConfig, SearchStrategy};
//!
//! let config: SchedulerConfig =
//!     serde_json::from_str(r#"{ "daily_cap": 6, "strategy": "per_slot" }"#).unwrap();
//! assert_eq!(config.daily_cap, 6);
//! assert_eq!(config.slots_per_day, 8);
//! assert_eq!(config.strategy, SearchStrategy::PerSlot);
//! ```

use serde::{Deserialize, Serialize};

use crate::availability::Horizon;
use crate::error::ConfigError;
use crate::models::{Level, Rank};

pub const DEFAULT_SLOTS_PER_DAY: usize = 8;
pub const DEFAULT_NUM_DAYS: usize = 5;
pub const DEFAULT_DAILY_CAP: u32 = 4;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Slots in one day.
    pub slots_per_day: usize,
    /// Days in the session.
    pub num_days: usize,
    /// Maximum jury roles per professor per day.
    pub daily_cap: u32,
    /// Who may chair a jury.
    pub presidency: PresidencyPolicy,
    /// Whether examiners must cover the student's field in the primary pass.
    pub examiner_specialty_required: bool,
    /// Primary pass search order.
    pub strategy: SearchStrategy,
    /// Fallback pass settings.
    pub relaxation: RelaxationPolicy,
}

/// Presidency eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresidencyPolicy {
    /// Minimum rank to chair a Licence defense.
    pub min_rank_licence: Rank,
    /// Minimum rank to chair a Master defense.
    pub min_rank_master: Rank,
    /// Rank that may never chair, if any.
    pub excluded_rank: Option<Rank>,
    /// Whether the president must hold at least the supervisor's rank.
    pub must_outrank_supervisor: bool,
}

/// Primary pass search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// For each student, take the earliest feasible slot.
    #[default]
    PerStudent,
    /// For each slot and free room, take the next feasible student.
    PerSlot,
}

/// Fallback pass settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxationPolicy {
    /// Whether to run the fallback pass at all.
    pub enabled: bool,
    /// Daily cap used by the fallback pass. `None` keeps the primary cap.
    pub daily_cap: Option<u32>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            slots_per_day: DEFAULT_SLOTS_PER_DAY,
            num_days: DEFAULT_NUM_DAYS,
            daily_cap: DEFAULT_DAILY_CAP,
            presidency: PresidencyPolicy::default(),
            examiner_specialty_required: true,
            strategy: SearchStrategy::default(),
            relaxation: RelaxationPolicy::default(),
        }
    }
}

impl Default for PresidencyPolicy {
    fn default() -> Self {
        Self {
            min_rank_licence: Rank(0),
            min_rank_master: Rank(0),
            excluded_rank: None,
            must_outrank_supervisor: false,
        }
    }
}

impl Default for RelaxationPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            daily_cap: None,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration (5 days × 8 slots, cap 4).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizon.
    pub fn with_horizon(mut self, num_days: usize, slots_per_day: usize) -> Self {
        self.num_days = num_days;
        self.slots_per_day = slots_per_day;
        self
    }

    /// Sets the daily cap.
    pub fn with_daily_cap(mut self, cap: u32) -> Self {
        self.daily_cap = cap;
        self
    }

    /// Sets the presidency policy.
    pub fn with_presidency(mut self, presidency: PresidencyPolicy) -> Self {
        self.presidency = presidency;
        self
    }

    /// Sets whether examiners must match the student's field.
    pub fn with_examiner_specialty_required(mut self, required: bool) -> Self {
        self.examiner_specialty_required = required;
        self
    }

    /// Sets the primary search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the fallback pass settings.
    pub fn with_relaxation(mut self, relaxation: RelaxationPolicy) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// The configured horizon.
    pub fn horizon(&self) -> Horizon {
        Horizon::new(self.num_days, self.slots_per_day)
    }

    /// Cap in force during the fallback pass.
    pub fn relaxed_daily_cap(&self) -> u32 {
        self.relaxation.daily_cap.unwrap_or(self.daily_cap)
    }

    /// Rejects configurations no run could use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.daily_cap == 0 {
            return Err(ConfigError::ZeroDailyCap);
        }
        if self.relaxation.daily_cap == Some(0) {
            return Err(ConfigError::ZeroRelaxedDailyCap);
        }
        if self.num_days == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if self.slots_per_day == 0 {
            return Err(ConfigError::ZeroSlotsPerDay);
        }
        Ok(())
    }
}

impl PresidencyPolicy {
    /// Creates a policy with per-level minimum ranks.
    pub fn new(min_rank_licence: Rank, min_rank_master: Rank) -> Self {
        Self {
            min_rank_licence,
            min_rank_master,
            ..Self::default()
        }
    }

    /// Forbids one rank from chairing.
    pub fn excluding(mut self, rank: Rank) -> Self {
        self.excluded_rank = Some(rank);
        self
    }

    /// Requires the president to hold at least the supervisor's rank.
    pub fn outranking_supervisor(mut self) -> Self {
        self.must_outrank_supervisor = true;
        self
    }

    /// Minimum president rank for a level.
    pub fn min_rank_for(&self, level: Level) -> Rank {
        match level {
            Level::Licence => self.min_rank_licence,
            Level::Master => self.min_rank_master,
        }
    }
}
