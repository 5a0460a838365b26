//! Round-robin fixture generation.
//!
//! Produces every pairing of a group exactly once, in an order that
//! spreads each team's games over the tournament instead of letting the
//! first team play all of its games back to back.
//!
//! # Algorithm
//!
//! 1. Enumerate the candidate pairs `(i, j)` with `i < j` in team order.
//! 2. Take candidates alternately from the front and the back of the
//!    remaining list, starting at the front.
//! 3. Number the taken pairs 1.. in the order they were taken.
//!
//! Groups are generated independently, concatenated, and stably sorted by
//! fixture number so that the groups interleave: `#1` of every group,
//! then `#2` of every group, and so on.

use std::collections::VecDeque;

use tracing::debug;
use uuid::Uuid;

use crate::models::{Fixture, Group, MatchPlan, TeamRef};

/// Side of the remaining candidate list the next pick is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Front,
    Back,
}

impl Traversal {
    fn flip(self) -> Self {
        match self {
            Traversal::Front => Traversal::Back,
            Traversal::Back => Traversal::Front,
        }
    }
}

/// Round-robin fixture generator.
///
/// Stateless; the output order is fully determined by the group and team
/// order of the input. Only the fixture ids are random.
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator;

impl FixtureGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates the fixtures of all groups.
    ///
    /// Returns an empty plan if there are no groups or if any group has
    /// fewer than two teams.
    pub fn generate(&self, groups: &[Group]) -> MatchPlan {
        if groups.is_empty() || groups.iter().any(|g| g.teams.len() < 2) {
            debug!(groups = groups.len(), "Nothing to generate");
            return MatchPlan::new();
        }

        let mut fixtures: Vec<Fixture> = groups.iter().flat_map(generate_group).collect();
        // Stable: equal numbers keep group order.
        fixtures.sort_by_key(|f| f.number);

        debug!(
            groups = groups.len(),
            fixtures = fixtures.len(),
            "Generated round-robin fixtures"
        );
        MatchPlan::from_fixtures(fixtures)
    }
}

fn generate_group(group: &Group) -> Vec<Fixture> {
    let refs: Vec<TeamRef> = group.teams.iter().map(|t| t.to_ref()).collect();

    let mut candidates: VecDeque<(usize, usize)> = (0..refs.len())
        .flat_map(|i| (i + 1..refs.len()).map(move |j| (i, j)))
        .collect();

    let mut fixtures = Vec::with_capacity(candidates.len());
    let mut traversal = Traversal::Front;
    let mut number = 1;

    loop {
        let pick = match traversal {
            Traversal::Front => candidates.pop_front(),
            Traversal::Back => candidates.pop_back(),
        };
        let Some((i, j)) = pick else { break };

        fixtures.push(Fixture::new(
            Uuid::new_v4().to_string(),
            number,
            group.number,
            refs[i].clone(),
            refs[j].clone(),
        ));
        number += 1;
        traversal = traversal.flip();
    }

    fixtures
}
