//! Match plan model.
//!
//! A match plan is the ordered fixture list of one tournament run. Its
//! order is the global play order: the generator emits it sorted by
//! fixture number and the distributor keeps that order (apart from
//! swap repair, which exchanges positions).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::fixture::Fixture;

/// Ordered fixtures of a tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPlan {
    /// Fixtures in play order.
    pub fixtures: Vec<Fixture>,
}

impl MatchPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan from fixtures, keeping their order.
    pub fn from_fixtures(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }

    /// Number of fixtures.
    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the plan has no fixtures.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Distinct team ids in order of first appearance (home side first).
    pub fn team_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for id in self.fixtures.iter().flat_map(|f| f.team_ids()) {
            if seen.insert(id) {
                ids.push(id.to_string());
            }
        }
        ids
    }

    /// Distinct group numbers, ascending.
    pub fn group_numbers(&self) -> Vec<u32> {
        self.fixtures
            .iter()
            .map(|f| f.group)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fixtures of one group, in plan order.
    pub fn fixtures_in_group(&self, group: u32) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.group == group).collect()
    }

    /// Fixtures assigned to one slot, in plan order.
    pub fn fixtures_in_slot(&self, slot: u32) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.slot == Some(slot))
            .collect()
    }

    /// Fixtures a team plays in, on either side.
    pub fn fixtures_for_team(&self, team_id: &str) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.involves(team_id)).collect()
    }

    /// Finds a fixture by id.
    pub fn fixture(&self, id: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    /// Highest slot number in use (0 if nothing is slotted).
    pub fn slot_count(&self) -> u32 {
        self.fixtures.iter().filter_map(|f| f.slot).max().unwrap_or(0)
    }

    /// Number of fixtures without a slot.
    pub fn unslotted_count(&self) -> usize {
        self.fixtures.iter().filter(|f| f.slot.is_none()).count()
    }

    /// Per-team fixture index: team id to the ids of every fixture the
    /// team plays in, in plan order.
    pub fn fixture_ids_by_team(&self) -> HashMap<String, Vec<String>> {
        let mut index: HashMap<String, Vec<String>> = HashMap::new();
        for fixture in &self.fixtures {
            for team_id in fixture.team_ids() {
                index
                    .entry(team_id.to_string())
                    .or_default()
                    .push(fixture.id.clone());
            }
        }
        index
    }
}
