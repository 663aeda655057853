//! Thesis-defense scheduling.
//!
//! Assigns each student a time slot, a room, and a three-person jury
//! (supervisor, president, examiner) under availability, rank, specialty,
//! and daily-workload constraints. The engine is greedy and deterministic:
//! identical inputs always produce identical schedules.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Professor`, `Student`, `Room`, `Defense`, `Rank`
//! - **`availability`**: Slot horizon and per-professor availability lookup
//! - **`eligibility`**: Role eligibility checks for one pass
//! - **`scheduler`**: Workload tracking, room allocation, the scheduling
//!   engine, and schedule statistics
//! - **`config`**: Scheduler configuration and presidency policy
//! - **`validation`**: Input integrity checks (duplicate ids, dangling supervisors)
//! - **`loader`**: JSON problem documents
//! - **`generator`**: Seeded synthetic instances
//!
//! # Example
//!
//! ```
//! use defense_schedule::config::SchedulerConfig;
//! use defense_schedule::models::{Level, Professor, Rank, Room, Student};
//! use defense_schedule::scheduler::{DefenseScheduler, ScheduleRequest, ScheduleStats};
//!
//! let request = ScheduleRequest::default()
//!     .with_professor(Professor::new("P1", Rank(1)).with_availability(0..8))
//!     .with_professor(Professor::new("P2", Rank(2)).with_availability(0..8))
//!     .with_professor(
//!         Professor::new("P3", Rank(1)).with_specialty("Networks").with_availability(0..8),
//!     )
//!     .with_student(Student::new("S1", Level::Licence, "Networks", "P1"))
//!     .with_room(Room::new("R1"));
//!
//! let scheduler = DefenseScheduler::new(SchedulerConfig::new().with_horizon(1, 8)).unwrap();
//! let outcome = scheduler.schedule(&request).unwrap();
//! let stats = ScheduleStats::calculate(&outcome);
//! assert!(stats.is_complete());
//! ```

pub mod availability;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod generator;
pub mod loader;
pub mod models;
pub mod scheduler;
pub mod validation;
