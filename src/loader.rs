//! JSON problem documents.
//!
//! A document carries the rank vocabulary, the entities, and optionally
//! the configuration. Professor availability is given as a day-by-slot
//! boolean grid and rank names are resolved through the document's scale:
//!
//! ```json
//! {
//!   "config": { "num_days": 1, "slots_per_day": 2, "daily_cap": 4 },
//!   "ranks": { "Docteur": 2, "MC": 3, "Professeur": 1 },
//!   "presidency": { "min_rank_licence": "Docteur", "excluded_rank": "Professeur" },
//!   "professors": [
//!     { "id": "P1", "name": "A", "rank": "MC", "specialties": ["AI"],
//!       "availability": [[true, false]] }
//!   ],
//!   "students": [
//!     { "id": "S1", "name": "X", "level": "Master", "field": "AI", "supervisor_id": "P1" }
//!   ],
//!   "rooms": [ { "id": "R1", "name": "Room 101" } ]
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::SchedulerConfig;
use crate::error::LoadError;
use crate::models::{Professor, Rank, RankScale, Room, Student};
use crate::scheduler::ScheduleRequest;

/// A loaded, validated problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub config: SchedulerConfig,
    pub ranks: RankScale,
    pub request: ScheduleRequest,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemDocument {
    #[serde(default)]
    config: SchedulerConfig,
    ranks: RankScale,
    #[serde(default)]
    presidency: Option<PresidencyDocument>,
    professors: Vec<ProfessorDocument>,
    students: Vec<Student>,
    rooms: Vec<Room>,
}

/// Presidency policy with ranks given by name.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PresidencyDocument {
    min_rank_licence: Option<String>,
    min_rank_master: Option<String>,
    excluded_rank: Option<String>,
    must_outrank_supervisor: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfessorDocument {
    id: String,
    #[serde(default)]
    name: String,
    rank: String,
    #[serde(default)]
    specialties: Vec<String>,
    availability: Vec<Vec<bool>>,
}

/// Loads a problem from a JSON file.
pub fn load_problem_file(path: impl AsRef<Path>) -> Result<Problem, LoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), "loading problem document");
    load_problem_str(&data)
}

/// Loads a problem from a JSON string.
pub fn load_problem_str(json: &str) -> Result<Problem, LoadError> {
    let doc: ProblemDocument = serde_json::from_str(json)?;
    let ranks = doc.ranks;
    let mut config = doc.config;

    if let Some(presidency) = doc.presidency {
        let policy = &mut config.presidency;
        if let Some(name) = presidency.min_rank_licence {
            policy.min_rank_licence = resolve(&ranks, &name)?;
        }
        if let Some(name) = presidency.min_rank_master {
            policy.min_rank_master = resolve(&ranks, &name)?;
        }
        policy.excluded_rank = presidency
            .excluded_rank
            .map(|name| resolve(&ranks, &name))
            .transpose()?;
        policy.must_outrank_supervisor = presidency.must_outrank_supervisor;
    }
    config.validate()?;

    let horizon = config.horizon();
    let professors = doc
        .professors
        .into_iter()
        .map(|p| -> Result<Professor, LoadError> {
            let rank = resolve(&ranks, &p.rank)?;
            let professor = Professor::new(p.id.clone(), rank)
                .with_name(p.name)
                .with_availability_grid(&p.availability, horizon)
                .map_err(|source| LoadError::Availability {
                    professor: p.id,
                    source,
                })?;
            Ok(p.specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .fold(professor, |prof, s| prof.with_specialty(s)))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    tracing::info!(
        professors = professors.len(),
        students = doc.students.len(),
        rooms = doc.rooms.len(),
        "problem document loaded"
    );

    Ok(Problem {
        config,
        ranks,
        request: ScheduleRequest::new(professors, doc.students, doc.rooms),
    })
}

fn resolve(ranks: &RankScale, name: &str) -> Result<Rank, LoadError> {
    ranks
        .resolve(name)
        .ok_or_else(|| LoadError::UnknownRank(name.to_string()))
}
