//! Greedy defense scheduler.
//!
//! # Algorithm
//!
//! 1. Precompute, per student, the specialty-matched examiners other than
//!    the supervisor (input order). Order students by ascending count of
//!    such examiners, stable on input order.
//! 2. Order professors by descending rank, stable on input order. The first
//!    eligible one chairs.
//! 3. Primary pass, per [`SearchStrategy`]:
//!    - `PerStudent`: each student takes the earliest slot where the
//!      supervisor, a president, an examiner, and a room are all free.
//!    - `PerSlot`: each (slot, free room) takes the first feasible student,
//!      scanning round-robin from a start index that advances after every
//!      commit.
//! 4. Relaxed pass: every slot that still has a free room is offered to the
//!    remaining students in scarcity order, with any professor allowed to
//!    examine and the relaxed daily cap in force.
//!
//! Commits are final. Nothing is undone to make room for a later student.
//!
//! # Complexity
//! O(s × t × p) where s=students, t=slots, p=professors.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::ScheduleState;
use crate::availability::Availability;
use crate::config::{SchedulerConfig, SearchStrategy};
use crate::eligibility::{Eligibility, PassRules};
use crate::error::ConfigError;
use crate::models::{Defense, Professor, Room, Slot, Student};
use crate::validation::validate_input;

/// Input container for scheduling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Jury candidates.
    pub professors: Vec<Professor>,
    /// Students awaiting a defense.
    pub students: Vec<Student>,
    /// Defense rooms, in allocation order.
    pub rooms: Vec<Room>,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(professors: Vec<Professor>, students: Vec<Student>, rooms: Vec<Room>) -> Self {
        Self {
            professors,
            students,
            rooms,
        }
    }

    /// Adds a professor.
    pub fn with_professor(mut self, professor: Professor) -> Self {
        self.professors.push(professor);
        self
    }

    /// Adds a student.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }
}

/// Why a student has no defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnscheduledReason {
    /// The supervisor id matches no professor. An input data problem.
    MissingSupervisor,
    /// No slot, room, and jury satisfied every constraint.
    ConstraintsExhausted,
}

/// A student left without a defense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unscheduled {
    pub student_id: String,
    pub reason: UnscheduledReason,
}

/// Result of one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Committed defenses in commit order.
    pub defenses: Vec<Defense>,
    /// Students without a defense, in input order.
    pub unscheduled: Vec<Unscheduled>,
    /// Defenses committed by the primary pass alone.
    pub primary_count: usize,
    /// Number of students in the request.
    pub student_count: usize,
    /// Final state, for statistics.
    pub state: ScheduleState,
}

impl ScheduleOutcome {
    /// Number of scheduled students.
    pub fn scheduled_count(&self) -> usize {
        self.defenses.len()
    }

    /// Defenses added by the relaxed pass.
    pub fn relaxed_count(&self) -> usize {
        self.defenses.len() - self.primary_count
    }

    /// Ids of students without a defense.
    pub fn unscheduled_ids(&self) -> BTreeSet<&str> {
        self.unscheduled
            .iter()
            .map(|u| u.student_id.as_str())
            .collect()
    }

    /// Count of unscheduled students with a given reason.
    pub fn unscheduled_count(&self, reason: UnscheduledReason) -> usize {
        self.unscheduled.iter().filter(|u| u.reason == reason).count()
    }

    /// The defense of a student.
    pub fn defense_for(&self, student_id: &str) -> Option<&Defense> {
        self.defenses.iter().find(|d| d.student_id == student_id)
    }

    /// Defenses a professor sits on, in any role.
    pub fn defenses_for_professor(&self, professor_id: &str) -> Vec<&Defense> {
        self.defenses
            .iter()
            .filter(|d| d.involves(professor_id))
            .collect()
    }
}

/// Greedy thesis-defense scheduler.
///
/// # Example
///
/// ```
/// use defense_schedule::config::SchedulerConfig;
/// use defense_schedule::models::{Level, Professor, Rank, Room, Student};
/// use defense_schedule::scheduler::{DefenseScheduler, ScheduleRequest};
///
/// let request = ScheduleRequest::new(
///     vec![
///         Professor::new("P1", Rank(1)).with_availability(0..8),
///         Professor::new("P2", Rank(3)).with_availability(0..8),
///         Professor::new("P3", Rank(2)).with_specialty("AI").with_availability(0..8),
///     ],
///     vec![Student::new("S1", Level::Master, "AI", "P1")],
///     vec![Room::new("R1")],
/// );
///
/// let scheduler = DefenseScheduler::new(SchedulerConfig::new().with_horizon(1, 8)).unwrap();
/// let outcome = scheduler.schedule(&request).unwrap();
/// let defense = outcome.defense_for("S1").unwrap();
/// assert_eq!(defense.slot, 0);
/// assert_eq!(defense.president_id, "P2");
/// assert_eq!(defense.examiner_id, "P3");
/// ```
#[derive(Debug, Clone)]
pub struct DefenseScheduler {
    config: SchedulerConfig,
}

impl DefenseScheduler {
    /// Creates a scheduler, rejecting unusable configurations.
    pub fn new(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the primary and, if enabled, the relaxed pass.
    ///
    /// Fails only if the request has no rooms. Every other problem shows up
    /// as an [`Unscheduled`] entry.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleOutcome, ConfigError> {
        if request.rooms.is_empty() {
            return Err(ConfigError::NoRooms);
        }

        let horizon = self.config.horizon();
        if let Err(errors) = validate_input(request, horizon) {
            for error in &errors {
                tracing::warn!(kind = ?error.kind, "{}", error.message);
            }
        }

        tracing::info!(
            professors = request.professors.len(),
            students = request.students.len(),
            rooms = request.rooms.len(),
            slots = horizon.total_slots(),
            strategy = ?self.config.strategy,
            "starting defense scheduling"
        );

        let run = Run::new(&self.config, request);
        let mut state = ScheduleState::new(request.rooms.clone(), horizon);
        let mut defenses = Vec::new();

        let primary = PassRules {
            daily_cap: self.config.daily_cap,
            examiner_specialty_required: self.config.examiner_specialty_required,
        };
        match self.config.strategy {
            SearchStrategy::PerStudent => run.per_student(primary, &mut state, &mut defenses),
            SearchStrategy::PerSlot => run.per_slot(primary, &mut state, &mut defenses),
        }
        let primary_count = defenses.len();
        tracing::info!(scheduled = primary_count, "primary pass finished");

        if self.config.relaxation.enabled {
            let relaxed = PassRules {
                daily_cap: self.config.relaxed_daily_cap(),
                examiner_specialty_required: false,
            };
            run.relaxed(relaxed, &mut state, &mut defenses);
            tracing::info!(
                added = defenses.len() - primary_count,
                "relaxed pass finished"
            );
        }

        let unscheduled = run.unscheduled(&state);
        tracing::info!(
            scheduled = defenses.len(),
            unscheduled = unscheduled.len(),
            "defense scheduling finished"
        );

        Ok(ScheduleOutcome {
            defenses,
            unscheduled,
            primary_count,
            student_count: request.students.len(),
            state,
        })
    }
}

/// A jury found for one student at one slot.
struct Jury<'a> {
    supervisor: &'a Professor,
    president: &'a Professor,
    examiner: &'a Professor,
}

/// Read-only data shared by every pass of one run.
struct Run<'a> {
    config: &'a SchedulerConfig,
    request: &'a ScheduleRequest,
    availability: Availability,
    /// Supervisor per student index, `None` when the reference is dangling.
    supervisors: Vec<Option<&'a Professor>>,
    /// Presidency scan order: rank descending, input order on ties.
    presidents: Vec<&'a Professor>,
    /// Specialty-matched examiners per student index, input order.
    examiner_options: Vec<Vec<&'a Professor>>,
    /// Student indices, fewest examiner options first.
    student_order: Vec<usize>,
}

impl<'a> Run<'a> {
    fn new(config: &'a SchedulerConfig, request: &'a ScheduleRequest) -> Self {
        let mut by_id: HashMap<&str, &Professor> = HashMap::new();
        for prof in &request.professors {
            by_id.entry(prof.id.as_str()).or_insert(prof);
        }

        let supervisors: Vec<Option<&Professor>> = request
            .students
            .iter()
            .map(|s| {
                let found = by_id.get(s.supervisor_id.as_str()).copied();
                if found.is_none() {
                    tracing::warn!(
                        student = %s.id,
                        supervisor = %s.supervisor_id,
                        "supervisor not found; student will not be scheduled"
                    );
                }
                found
            })
            .collect();

        let mut presidents: Vec<&Professor> = request.professors.iter().collect();
        presidents.sort_by(|a, b| b.rank.cmp(&a.rank));

        let examiner_options: Vec<Vec<&Professor>> = request
            .students
            .iter()
            .map(|s| {
                request
                    .professors
                    .iter()
                    .filter(|p| p.has_specialty(&s.field) && p.id != s.supervisor_id)
                    .collect()
            })
            .collect();

        let mut student_order: Vec<usize> = (0..request.students.len()).collect();
        student_order.sort_by_key(|&i| examiner_options[i].len());

        Self {
            config,
            request,
            availability: Availability::from_professors(&request.professors),
            supervisors,
            presidents,
            examiner_options,
            student_order,
        }
    }

    fn eligibility(&self, rules: PassRules) -> Eligibility<'_> {
        Eligibility::new(&self.availability, &self.config.presidency, rules)
    }

    fn slots(&self) -> std::ops::Range<Slot> {
        self.config.horizon().slots()
    }

    /// Whether a student still needs a defense and can get one at all.
    fn is_pending(&self, idx: usize, state: &ScheduleState) -> bool {
        self.supervisors[idx].is_some() && !state.is_scheduled(&self.request.students[idx].id)
    }

    fn pending_count(&self, state: &ScheduleState) -> usize {
        (0..self.request.students.len())
            .filter(|&i| self.is_pending(i, state))
            .count()
    }

    /// Supervisor, then highest-ranked president, then first examiner.
    fn find_jury(
        &self,
        eligibility: &Eligibility<'_>,
        idx: usize,
        slot: Slot,
        state: &ScheduleState,
    ) -> Option<Jury<'a>> {
        let student = &self.request.students[idx];
        let supervisor = self.supervisors[idx]?;
        if !eligibility.can_supervise(supervisor, slot, state) {
            return None;
        }

        let president = self
            .presidents
            .iter()
            .copied()
            .find(|p| eligibility.can_chair(p, student, supervisor, slot, state))?;

        let fits = |p: &&'a Professor| {
            eligibility.can_examine(p, student, &president.id, &supervisor.id, slot, state)
        };
        let examiner = if eligibility.rules().examiner_specialty_required {
            self.examiner_options[idx].iter().copied().find(fits)?
        } else {
            self.request.professors.iter().find(fits)?
        };

        Some(Jury {
            supervisor,
            president,
            examiner,
        })
    }

    fn commit(
        &self,
        idx: usize,
        slot: Slot,
        room_id: &str,
        jury: Jury<'_>,
        state: &mut ScheduleState,
        defenses: &mut Vec<Defense>,
    ) -> bool {
        let defense = Defense {
            student_id: self.request.students[idx].id.clone(),
            slot,
            room_id: room_id.to_string(),
            president_id: jury.president.id.clone(),
            examiner_id: jury.examiner.id.clone(),
            supervisor_id: jury.supervisor.id.clone(),
        };
        if !state.commit(&defense) {
            return false;
        }
        tracing::debug!(
            student = %defense.student_id,
            slot,
            room = %defense.room_id,
            president = %defense.president_id,
            examiner = %defense.examiner_id,
            supervisor = %defense.supervisor_id,
            "defense committed"
        );
        defenses.push(defense);
        true
    }

    fn per_student(&self, rules: PassRules, state: &mut ScheduleState, defenses: &mut Vec<Defense>) {
        let eligibility = self.eligibility(rules);

        for &idx in &self.student_order {
            if !self.is_pending(idx, state) {
                continue;
            }
            for slot in self.slots() {
                let Some(room_id) = state.rooms().first_free_room(slot).map(|r| r.id.clone())
                else {
                    continue;
                };
                if let Some(jury) = self.find_jury(&eligibility, idx, slot, state) {
                    if self.commit(idx, slot, &room_id, jury, state, defenses) {
                        break;
                    }
                }
            }
        }
    }

    fn per_slot(&self, rules: PassRules, state: &mut ScheduleState, defenses: &mut Vec<Defense>) {
        let eligibility = self.eligibility(rules);
        let n = self.student_order.len();
        let mut start = 0;

        for slot in self.slots() {
            if self.pending_count(state) == 0 {
                break;
            }
            let free_rooms: Vec<String> = state.rooms().free_rooms(slot).map(|r| r.id.clone()).collect();
            for room_id in free_rooms {
                for offset in 0..n {
                    let idx = self.student_order[(start + offset) % n];
                    if !self.is_pending(idx, state) {
                        continue;
                    }
                    if let Some(jury) = self.find_jury(&eligibility, idx, slot, state) {
                        if self.commit(idx, slot, &room_id, jury, state, defenses) {
                            start = (start + 1) % n;
                            break;
                        }
                    }
                }
            }
        }
    }

    fn relaxed(&self, rules: PassRules, state: &mut ScheduleState, defenses: &mut Vec<Defense>) {
        let eligibility = self.eligibility(rules);

        let open_slots = state.rooms().slots_with_free_room();
        for slot in open_slots {
            if self.pending_count(state) == 0 {
                break;
            }
            let free_rooms: Vec<String> = state.rooms().free_rooms(slot).map(|r| r.id.clone()).collect();
            for room_id in free_rooms {
                for &idx in &self.student_order {
                    if !self.is_pending(idx, state) {
                        continue;
                    }
                    if let Some(jury) = self.find_jury(&eligibility, idx, slot, state) {
                        if self.commit(idx, slot, &room_id, jury, state, defenses) {
                            break;
                        }
                    }
                }
            }
        }
    }

    fn unscheduled(&self, state: &ScheduleState) -> Vec<Unscheduled> {
        self.request
            .students
            .iter()
            .zip(&self.supervisors)
            .filter(|(s, _)| !state.is_scheduled(&s.id))
            .map(|(s, supervisor)| Unscheduled {
                student_id: s.id.clone(),
                reason: if supervisor.is_some() {
                    UnscheduledReason::ConstraintsExhausted
                } else {
                    UnscheduledReason::MissingSupervisor
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PresidencyPolicy, RelaxationPolicy};
    use crate::generator::{generate, GeneratorConfig};
    use crate::models::{Level, Rank};
    use std::collections::HashSet;

    fn prof(id: &str, rank: u32, specialties: &[&str], slots: std::ops::Range<Slot>) -> Professor {
        specialties
            .iter()
            .fold(Professor::new(id, Rank(rank)), |p, s| p.with_specialty(*s))
            .with_availability(slots)
    }

    fn run(config: SchedulerConfig, request: &ScheduleRequest) -> ScheduleOutcome {
        DefenseScheduler::new(config).unwrap().schedule(request).unwrap()
    }

    /// Supervisor P1, senior P2, AI examiner P3, all free over one day of 4 slots.
    fn basic_request() -> ScheduleRequest {
        ScheduleRequest::default()
            .with_professor(prof("P1", 1, &[], 0..4))
            .with_professor(prof("P2", 3, &[], 0..4))
            .with_professor(prof("P3", 2, &["AI"], 0..4))
            .with_room(Room::new("R1"))
    }

    fn assert_invariants(config: &SchedulerConfig, request: &ScheduleRequest, outcome: &ScheduleOutcome) {
        let horizon = config.horizon();
        let cap = config.daily_cap.max(config.relaxed_daily_cap());
        let by_id: HashMap<&str, &Professor> =
            request.professors.iter().map(|p| (p.id.as_str(), p)).collect();

        let mut seats = HashSet::new();
        let mut rooms = HashSet::new();
        let mut daily: HashMap<(&str, usize), u32> = HashMap::new();
        for d in &outcome.defenses {
            let [sup, pres, exam] = d.jury();
            assert!(sup != pres && sup != exam && pres != exam, "roles overlap in {d:?}");
            assert!(rooms.insert((d.room_id.as_str(), d.slot)), "room double-booked");
            for id in d.jury() {
                assert!(seats.insert((id, d.slot)), "{id} double-booked at {}", d.slot);
                assert!(by_id[id].is_available_at(d.slot), "{id} unavailable at {}", d.slot);
                *daily.entry((id, horizon.day_of(d.slot))).or_default() += 1;
            }
        }
        assert!(daily.values().all(|&n| n <= cap));
        assert_eq!(
            outcome.defenses.len() + outcome.unscheduled.len(),
            request.students.len()
        );
    }

    #[test]
    fn test_single_defense() {
        let request = basic_request().with_student(Student::new("S1", Level::Master, "AI", "P1"));
        let outcome = run(SchedulerConfig::new().with_horizon(1, 4), &request);

        assert_eq!(outcome.scheduled_count(), 1);
        assert_eq!(outcome.primary_count, 1);
        let d = outcome.defense_for("S1").unwrap();
        assert_eq!(d.slot, 0);
        assert_eq!(d.room_id, "R1");
        assert_eq!(d.supervisor_id, "P1");
        assert_eq!(d.president_id, "P2");
        assert_eq!(d.examiner_id, "P3");
    }

    #[test]
    fn test_one_slot_two_students() {
        let request = basic_request()
            .with_student(Student::new("S1", Level::Master, "AI", "P1"))
            .with_student(Student::new("S2", Level::Master, "AI", "P1"));
        let config = SchedulerConfig::new().with_horizon(1, 1);
        let outcome = run(config.clone(), &request);

        assert_eq!(outcome.scheduled_count(), 1);
        assert_eq!(outcome.defenses[0].student_id, "S1");
        assert_eq!(outcome.unscheduled.len(), 1);
        assert_eq!(outcome.unscheduled[0].student_id, "S2");
        assert_eq!(outcome.unscheduled[0].reason, UnscheduledReason::ConstraintsExhausted);
        assert_invariants(&config, &request, &outcome);
    }

    #[test]
    fn test_excluded_rank_never_chairs() {
        let request = basic_request()
            .with_professor(prof("P4", 1, &["AI"], 0..4))
            .with_student(Student::new("S1", Level::Master, "AI", "P1"));
        let config = SchedulerConfig::new()
            .with_horizon(1, 4)
            .with_presidency(PresidencyPolicy::default().excluding(Rank(3)));
        let outcome = run(config, &request);

        let d = outcome.defense_for("S1").unwrap();
        assert_eq!(d.president_id, "P3");
        assert_eq!(d.examiner_id, "P4");
        assert!(outcome.defenses.iter().all(|d| d.president_id != "P2"));
    }

    #[test]
    fn test_excluded_rank_leaves_student_unscheduled() {
        // Only P2 reaches the Master minimum, and P2's rank is excluded.
        let request = basic_request().with_student(Student::new("S1", Level::Master, "AI", "P1"));
        let config = SchedulerConfig::new()
            .with_horizon(1, 4)
            .with_presidency(PresidencyPolicy::new(Rank(1), Rank(3)).excluding(Rank(3)));
        let outcome = run(config, &request);

        assert!(outcome.defenses.is_empty());
        assert_eq!(outcome.unscheduled_count(UnscheduledReason::ConstraintsExhausted), 1);
    }

    #[test]
    fn test_level_minimum_rank() {
        // Licence accepts rank 2, Master needs rank 3.
        let request = ScheduleRequest::default()
            .with_professor(prof("P1", 1, &[], 0..1))
            .with_professor(prof("P3", 2, &["AI"], 0..1))
            .with_professor(prof("P4", 2, &["AI"], 0..1))
            .with_room(Room::new("R1"))
            .with_room(Room::new("R2"))
            .with_student(Student::new("S1", Level::Master, "AI", "P1"))
            .with_student(Student::new("S2", Level::Licence, "AI", "P1"));
        let config = SchedulerConfig::new()
            .with_horizon(1, 1)
            .with_presidency(PresidencyPolicy::new(Rank(2), Rank(3)));
        let outcome = run(config, &request);

        assert!(outcome.defense_for("S1").is_none());
        let d = outcome.defense_for("S2").unwrap();
        assert_eq!(d.president_id, "P3");
        assert_eq!(d.examiner_id, "P4");
    }

    #[test]
    fn test_must_outrank_supervisor() {
        let request = ScheduleRequest::default()
            .with_professor(prof("P1", 3, &[], 0..2))
            .with_professor(prof("P2", 2, &[], 0..2))
            .with_professor(prof("P3", 1, &["AI"], 0..2))
            .with_room(Room::new("R1"))
            .with_student(Student::new("S1", Level::Licence, "AI", "P1"));

        let lenient = run(SchedulerConfig::new().with_horizon(1, 2), &request);
        assert_eq!(lenient.defense_for("S1").unwrap().president_id, "P2");

        let strict = run(
            SchedulerConfig::new()
                .with_horizon(1, 2)
                .with_presidency(PresidencyPolicy::default().outranking_supervisor()),
            &request,
        );
        assert!(strict.defenses.is_empty());
    }

    #[test]
    fn test_missing_supervisor() {
        let request = basic_request()
            .with_student(Student::new("S1", Level::Master, "AI", "NOBODY"))
            .with_student(Student::new("S2", Level::Master, "AI", "P1"));
        let outcome = run(SchedulerConfig::new().with_horizon(1, 4), &request);

        assert_eq!(outcome.scheduled_count(), 1);
        assert_eq!(
            outcome.unscheduled,
            vec![Unscheduled {
                student_id: "S1".into(),
                reason: UnscheduledReason::MissingSupervisor,
            }]
        );
    }

    #[test]
    fn test_daily_cap_limits_supervisor() {
        let mut request = basic_request().with_professor(prof("P4", 2, &["AI"], 0..8));
        request.professors = request
            .professors
            .into_iter()
            .map(|p| p.with_availability(0..8))
            .collect();
        for i in 0..10 {
            request.students.push(Student::new(format!("S{i}"), Level::Master, "AI", "P1"));
        }
        let base = SchedulerConfig::new()
            .with_horizon(1, 8)
            .with_relaxation(RelaxationPolicy { enabled: false, daily_cap: None });

        let capped = run(base.clone().with_daily_cap(4), &request);
        assert_eq!(capped.scheduled_count(), 4);
        assert_invariants(&base.clone().with_daily_cap(4), &request, &capped);

        let raised = run(base.with_daily_cap(8), &request);
        assert_eq!(raised.scheduled_count(), 8);
        assert!(raised.scheduled_count() >= capped.scheduled_count());
    }

    #[test]
    fn test_scarce_student_goes_first() {
        let request = ScheduleRequest::default()
            .with_professor(prof("P1", 1, &[], 0..1))
            .with_professor(prof("P2", 3, &[], 0..1))
            .with_professor(prof("P3", 2, &["AI"], 0..1))
            .with_professor(prof("P4", 2, &["AI", "Security"], 0..1))
            .with_room(Room::new("R1"))
            .with_student(Student::new("S1", Level::Master, "AI", "P1"))
            .with_student(Student::new("S2", Level::Master, "Security", "P1"));
        let outcome = run(SchedulerConfig::new().with_horizon(1, 1), &request);

        assert_eq!(outcome.scheduled_count(), 1);
        assert_eq!(outcome.defenses[0].student_id, "S2");
        assert_eq!(outcome.defenses[0].examiner_id, "P4");
    }

    #[test]
    fn test_relaxed_pass_drops_specialty() {
        let request = basic_request().with_student(Student::new("S1", Level::Master, "Robotics", "P1"));

        let outcome = run(SchedulerConfig::new().with_horizon(1, 4), &request);
        assert_eq!(outcome.primary_count, 0);
        assert_eq!(outcome.relaxed_count(), 1);
        let d = outcome.defense_for("S1").unwrap();
        assert_eq!(d.president_id, "P2");
        assert_eq!(d.examiner_id, "P3");

        let strict = run(
            SchedulerConfig::new()
                .with_horizon(1, 4)
                .with_relaxation(RelaxationPolicy { enabled: false, daily_cap: None }),
            &request,
        );
        assert!(strict.defenses.is_empty());
        assert_eq!(strict.unscheduled_count(UnscheduledReason::ConstraintsExhausted), 1);
    }

    #[test]
    fn test_relaxed_daily_cap() {
        let request = basic_request()
            .with_student(Student::new("S1", Level::Master, "AI", "P1"))
            .with_student(Student::new("S2", Level::Master, "AI", "P1"))
            .with_student(Student::new("S3", Level::Master, "AI", "P1"));
        let config = SchedulerConfig::new()
            .with_horizon(1, 4)
            .with_daily_cap(1)
            .with_relaxation(RelaxationPolicy { enabled: true, daily_cap: Some(8) });
        let outcome = run(config.clone(), &request);

        assert_eq!(outcome.primary_count, 1);
        assert_eq!(outcome.scheduled_count(), 3);
        assert_invariants(&config, &request, &outcome);
    }

    #[test]
    fn test_per_slot_strategy() {
        let request = ScheduleRequest::default()
            .with_professor(prof("P1", 1, &[], 0..2))
            .with_professor(prof("P2", 1, &[], 0..2))
            .with_professor(prof("P3", 2, &["AI"], 0..2))
            .with_professor(prof("P4", 3, &[], 0..2))
            .with_room(Room::new("R1"))
            .with_student(Student::new("S1", Level::Master, "AI", "P1"))
            .with_student(Student::new("S2", Level::Master, "AI", "P2"));
        let config = SchedulerConfig::new()
            .with_horizon(1, 2)
            .with_strategy(SearchStrategy::PerSlot);
        let outcome = run(config.clone(), &request);

        assert_eq!(outcome.scheduled_count(), 2);
        assert_eq!(outcome.defense_for("S1").unwrap().slot, 0);
        assert_eq!(outcome.defense_for("S2").unwrap().slot, 1);
        assert_invariants(&config, &request, &outcome);
    }

    #[test]
    fn test_empty_rooms_rejected() {
        let request = ScheduleRequest::default()
            .with_professor(prof("P1", 1, &[], 0..4))
            .with_student(Student::new("S1", Level::Master, "AI", "P1"));
        let scheduler = DefenseScheduler::new(SchedulerConfig::new()).unwrap();
        assert_eq!(scheduler.schedule(&request).unwrap_err(), ConfigError::NoRooms);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = DefenseScheduler::new(SchedulerConfig::new().with_daily_cap(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDailyCap);
    }

    #[test]
    fn test_empty_student_list() {
        let outcome = run(SchedulerConfig::new(), &basic_request());
        assert!(outcome.defenses.is_empty());
        assert!(outcome.unscheduled.is_empty());
    }

    #[test]
    fn test_generated_instances_hold_invariants() {
        for generator in [GeneratorConfig::default(), GeneratorConfig::crowded()] {
            for strategy in [SearchStrategy::PerStudent, SearchStrategy::PerSlot] {
                for seed in 0..8 {
                    let request = generate(&generator, seed);
                    let config = SchedulerConfig::new()
                        .with_horizon(generator.horizon.num_days, generator.horizon.slots_per_day)
                        .with_strategy(strategy);
                    let outcome = run(config.clone(), &request);
                    assert_invariants(&config, &request, &outcome);
                    assert!(outcome.scheduled_count() >= outcome.primary_count);
                }
            }
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let generator = GeneratorConfig::crowded();
        let config = SchedulerConfig::new()
            .with_horizon(generator.horizon.num_days, generator.horizon.slots_per_day);
        for seed in [1, 17, 99] {
            let request = generate(&generator, seed);
            let a = run(config.clone(), &request);
            let b = run(config.clone(), &request);
            assert_eq!(a.defenses, b.defenses);
            assert_eq!(a.unscheduled, b.unscheduled);
        }
    }

    #[test]
    fn test_relaxation_never_loses_defenses() {
        let generator = GeneratorConfig::crowded();
        for seed in 0..8 {
            let request = generate(&generator, seed);
            let base = SchedulerConfig::new()
                .with_horizon(generator.horizon.num_days, generator.horizon.slots_per_day);
            let without = run(
                base.clone()
                    .with_relaxation(RelaxationPolicy { enabled: false, daily_cap: None }),
                &request,
            );
            let with = run(base, &request);
            assert_eq!(with.primary_count, without.scheduled_count());
            assert!(with.scheduled_count() >= without.scheduled_count());
        }
    }

    #[test]
    fn test_dangling_supervisors_are_reported() {
        let generator = GeneratorConfig {
            dangling_supervisor_rate: 1.0,
            ..GeneratorConfig::crowded()
        };
        let request = generate(&generator, 5);
        let outcome = run(SchedulerConfig::new(), &request);
        assert!(outcome.defenses.is_empty());
        assert_eq!(
            outcome.unscheduled_count(UnscheduledReason::MissingSupervisor),
            request.students.len()
        );
    }
}
