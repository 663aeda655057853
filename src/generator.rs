//! Seeded random problem instances.
//!
//! Produces synthetic defense sessions shaped like real department data:
//! a handful of fields, professors with one or two specialties and mixed
//! ranks, students with a random level, field, and supervisor. Availability
//! is drawn per slot with a configurable density. The same seed always
//! yields the same instance.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::availability::Horizon;
use crate::models::{Level, Professor, Rank, Room, Student};
use crate::scheduler::ScheduleRequest;

/// Default specialty vocabulary.
pub const DEFAULT_FIELDS: [&str; 5] = [
    "Software Engineering",
    "Artificial Intelligence",
    "Security",
    "Multimedia",
    "Embedded Systems",
];

/// Instance generator settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_professors: usize,
    pub num_students: usize,
    pub num_rooms: usize,
    pub horizon: Horizon,
    /// Rank values to draw from.
    pub ranks: Vec<Rank>,
    /// Specialty vocabulary.
    pub fields: Vec<String>,
    /// Probability that a professor is available in a given slot.
    pub availability_density: f64,
    /// Probability that a student's supervisor id points at no professor.
    pub dangling_supervisor_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_professors: 10,
            num_students: 40,
            num_rooms: 3,
            horizon: Horizon::new(5, 8),
            ranks: vec![Rank(1), Rank(2), Rank(3)],
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            availability_density: 0.7,
            dangling_supervisor_rate: 0.0,
        }
    }
}

impl GeneratorConfig {
    /// A small, crowded instance where many students compete for few juries.
    pub fn crowded() -> Self {
        Self {
            num_professors: 6,
            num_students: 30,
            num_rooms: 2,
            horizon: Horizon::new(2, 4),
            availability_density: 0.5,
            ..Self::default()
        }
    }
}

/// Generates a problem instance from a seed.
pub fn generate(config: &GeneratorConfig, seed: u64) -> ScheduleRequest {
    let mut rng = StdRng::seed_from_u64(seed);

    let professors: Vec<Professor> = (0..config.num_professors)
        .map(|i| {
            let rank = config.ranks.choose(&mut rng).copied().unwrap_or_default();
            let k = rng.random_range(1..=2).min(config.fields.len());
            let specialties: Vec<&String> =
                config.fields.choose_multiple(&mut rng, k).collect();
            let slots: Vec<usize> = config
                .horizon
                .slots()
                .filter(|_| rng.random_bool(config.availability_density))
                .collect();

            specialties
                .into_iter()
                .fold(Professor::new(format!("P{}", i + 1), rank), |p, s| {
                    p.with_specialty(s.clone())
                })
                .with_name(format!("Professor {}", i + 1))
                .with_availability(slots)
        })
        .collect();

    let students: Vec<Student> = (0..config.num_students)
        .map(|i| {
            let level = if rng.random_bool(0.5) {
                Level::Licence
            } else {
                Level::Master
            };
            let field = config.fields.choose(&mut rng).cloned().unwrap_or_default();
            let supervisor = if professors.is_empty()
                || rng.random_bool(config.dangling_supervisor_rate)
            {
                format!("X{}", i + 1)
            } else {
                professors[rng.random_range(0..professors.len())].id.clone()
            };
            Student::new(format!("S{}", i + 1), level, field, supervisor)
                .with_name(format!("Student {}", i + 1))
        })
        .collect();

    let rooms = (0..config.num_rooms)
        .map(|i| Room::new(format!("R{}", i + 1)).with_name(format!("Room {}", 100 + i)))
        .collect();

    ScheduleRequest::new(professors, students, rooms)
}
