//! Slot distribution with swap repair.
//!
//! Assigns every fixture of a validated plan to a numbered time slot.
//! Fixtures sharing a slot are played simultaneously on different
//! pitches, so a slot holds at most one fixture per pitch and never
//! the same team twice.
//!
//! # Algorithm
//!
//! Greedy placement in passes over the unslotted fixtures, in plan order:
//!
//! 1. Place a fixture in the current slot if neither team plays there yet.
//! 2. A conflicting fixture is deferred to a later pass, unless it is the
//!    last unslotted fixture. Then it is repaired: the first slotted
//!    fixture (slot 1 upward, plan order within a slot) it can trade
//!    slots with, without duplicating a team in either slot, is swapped
//!    with it. If no such fixture exists it gets a new slot of its own.
//! 3. A full slot closes and the next one opens, except directly after a
//!    deferral: then the pass ends so the deferred fixtures are tried
//!    against the next slot first.
//! 4. A pass that places nothing closes the current slot.
//!
//! Tournaments of three teams or fewer are played one fixture at a time
//! regardless of the pitch count.
//!
//! # Complexity
//! O(n²) in the number of fixtures; repair adds one O(n²) scan.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Fixture, MatchPlan};
use crate::validation::PlanValidator;

/// Tournaments with at most this many teams use a single pitch.
const SINGLE_PITCH_MAX_TEAMS: usize = 3;

/// Outcome of one placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Placed in the given slot.
    Placed(u32),
    /// Conflicts with the current slot; retried in a later pass.
    Deferred,
    /// Traded slots with an already slotted fixture.
    Swapped {
        /// Slot the placed fixture moved into.
        slot: u32,
        /// Id of the fixture it traded with.
        counterpart: String,
    },
    /// Placed alone in a newly opened slot.
    NewSlot(u32),
}

/// Fixtures per slot for a tournament of `team_count` teams.
///
/// Tournaments of three teams or fewer get one fixture per slot; a pitch
/// count of 0 counts as 1.
pub fn effective_capacity(team_count: usize, number_of_pitches: usize) -> usize {
    if team_count > SINGLE_PITCH_MAX_TEAMS {
        number_of_pitches.max(1)
    } else {
        1
    }
}

/// Slot distributor.
///
/// # Example
///
/// ```
/// use tournament_scheduler::generator::FixtureGenerator;
/// use tournament_scheduler::models::{Group, Team};
/// use tournament_scheduler::scheduler::SlotDistributor;
///
/// let group = Group::new(1).with_teams((0..4).map(|i| Team::new(format!("t{i}"), "Team")));
/// let plan = FixtureGenerator::new().generate(&[group]);
///
/// let distributed = SlotDistributor::new().distribute(&plan, 2).unwrap();
/// assert_eq!(distributed.slot_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotDistributor {
    validator: PlanValidator,
}

impl SlotDistributor {
    /// Creates a distributor.
    pub fn new() -> Self {
        Self {
            validator: PlanValidator::new(),
        }
    }

    /// Distributes the fixtures of a plan over slots.
    ///
    /// Incoming slot values are discarded. A pitch count of 0 is treated
    /// as 1. The returned plan keeps plan order, except that a swap repair
    /// also exchanges the positions of the two fixtures involved.
    ///
    /// # Errors
    /// `Error::ValidationFailed` carrying every finding if the plan does
    /// not validate.
    pub fn distribute(&self, plan: &MatchPlan, number_of_pitches: usize) -> Result<MatchPlan> {
        let findings = self.validator.validate(plan);
        if !findings.is_empty() {
            warn!(findings = findings.len(), "Refusing to distribute invalid plan");
            return Err(Error::ValidationFailed { findings });
        }

        let capacity = effective_capacity(plan.team_ids().len(), number_of_pitches);

        let mut fixtures = plan.fixtures.clone();
        fixtures.sort_by_key(|f| f.number);
        for fixture in &mut fixtures {
            fixture.slot = None;
        }

        let mut board = SlotBoard::new(capacity);
        let mut remaining = fixtures.len();
        let mut passes = 0usize;

        while remaining > 0 {
            passes += 1;
            if board.current_is_full() {
                board.open_slot();
            }

            let pending: Vec<usize> = (0..fixtures.len())
                .filter(|&i| fixtures[i].slot.is_none())
                .collect();
            let mut previous_deferred = false;
            let mut progressed = false;

            for idx in pending {
                match board.place(&mut fixtures, idx, remaining) {
                    Placement::Placed(_) => {
                        remaining -= 1;
                        progressed = true;
                        if board.current_is_full() {
                            if previous_deferred {
                                break;
                            }
                            board.open_slot();
                        }
                        previous_deferred = false;
                    }
                    Placement::Deferred => previous_deferred = true,
                    outcome @ (Placement::Swapped { .. } | Placement::NewSlot(_)) => {
                        debug!(?outcome, "Repaired last fixture");
                        remaining -= 1;
                        progressed = true;
                        break;
                    }
                }
            }

            if !progressed {
                board.open_slot();
            }
        }

        debug!(
            fixtures = fixtures.len(),
            capacity,
            slots = board.slot_count(),
            passes,
            "Distributed fixtures"
        );
        Ok(MatchPlan::from_fixtures(fixtures))
    }
}

/// Teams and fixture count of one slot.
#[derive(Debug, Default)]
struct SlotState {
    teams: HashSet<String>,
    fixtures: usize,
}

impl SlotState {
    fn uses_any(&self, fixture: &Fixture) -> bool {
        fixture.team_ids().iter().any(|id| self.teams.contains(*id))
    }

    fn add(&mut self, fixture: &Fixture) {
        for id in fixture.team_ids() {
            self.teams.insert(id.to_string());
        }
        self.fixtures += 1;
    }
}

/// Slot bookkeeping. Slot `n` lives at index `n - 1`; the last slot is
/// the one being filled.
#[derive(Debug)]
struct SlotBoard {
    capacity: usize,
    slots: Vec<SlotState>,
}

impl SlotBoard {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: vec![SlotState::default()],
        }
    }

    fn current(&self) -> u32 {
        self.slots.len() as u32
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn state(&self, slot: u32) -> &SlotState {
        &self.slots[slot as usize - 1]
    }

    fn state_mut(&mut self, slot: u32) -> &mut SlotState {
        &mut self.slots[slot as usize - 1]
    }

    fn current_is_full(&self) -> bool {
        self.state(self.current()).fixtures >= self.capacity
    }

    fn open_slot(&mut self) -> u32 {
        self.slots.push(SlotState::default());
        self.current()
    }

    fn assign(&mut self, fixtures: &mut [Fixture], idx: usize, slot: u32) {
        fixtures[idx].slot = Some(slot);
        self.state_mut(slot).add(&fixtures[idx]);
    }

    /// Attempts to place the fixture at `idx` into the current slot.
    fn place(&mut self, fixtures: &mut [Fixture], idx: usize, remaining: usize) -> Placement {
        let current = self.current();

        if !self.state(current).uses_any(&fixtures[idx]) {
            self.assign(fixtures, idx, current);
            return Placement::Placed(current);
        }

        if remaining > 1 {
            return Placement::Deferred;
        }

        match self.find_swap(fixtures, idx) {
            Some(other) => self.swap(fixtures, idx, other),
            None => {
                let slot = self.open_slot();
                self.assign(fixtures, idx, slot);
                Placement::NewSlot(slot)
            }
        }
    }

    /// First slotted fixture the fixture at `idx` can trade slots with.
    fn find_swap(&self, fixtures: &[Fixture], idx: usize) -> Option<usize> {
        let current = self.current();
        let target = &fixtures[idx];

        for slot in 1..current {
            let members: Vec<usize> = (0..fixtures.len())
                .filter(|&i| fixtures[i].slot == Some(slot))
                .collect();

            for &candidate in &members {
                if self.state(current).uses_any(&fixtures[candidate]) {
                    continue;
                }
                let fits = members
                    .iter()
                    .filter(|&&other| other != candidate)
                    .all(|&other| !fixtures[other].shares_team_with(target));
                if fits {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Moves the fixture at `idx` into `other`'s slot and `other` into the
    /// current slot, then exchanges their positions.
    fn swap(&mut self, fixtures: &mut [Fixture], idx: usize, other: usize) -> Placement {
        let current = self.current();
        let Some(slot) = fixtures[other].slot else {
            return Placement::Deferred;
        };

        fixtures[other].slot = Some(current);
        self.state_mut(current).add(&fixtures[other]);

        fixtures[idx].slot = Some(slot);
        let rebuilt = fixtures
            .iter()
            .filter(|f| f.slot == Some(slot))
            .fold(SlotState::default(), |mut state, f| {
                state.add(f);
                state
            });
        *self.state_mut(slot) = rebuilt;

        let counterpart = fixtures[other].id.clone();
        fixtures.swap(idx, other);
        Placement::Swapped { slot, counterpart }
    }
}
