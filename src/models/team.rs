//! Team and group models.
//!
//! Teams arrive already partitioned into groups; the group a team plays
//! in is an input to scheduling, never computed by it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A participating team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Opaque identifier, unique across the whole plan.
    ///
    /// `None` for malformed input; fixtures then carry an empty id.
    pub team_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Group the team plays in.
    pub group: Option<u32>,
}

impl Team {
    /// Creates a team with the given ID and name.
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_id: Some(team_id.into()),
            name: name.into(),
            group: None,
        }
    }

    /// Creates a team without an ID.
    pub fn unidentified(name: impl Into<String>) -> Self {
        Self {
            team_id: None,
            name: name.into(),
            group: None,
        }
    }

    /// Sets the group number.
    pub fn with_group(mut self, group: u32) -> Self {
        self.group = Some(group);
        self
    }

    /// Reference used inside fixtures. A missing ID becomes the empty string.
    pub fn to_ref(&self) -> TeamRef {
        TeamRef {
            team_id: self.team_id.clone().unwrap_or_default(),
            name: self.name.clone(),
        }
    }
}

/// Team reference stored on a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRef {
    /// Team identifier (empty when the source team had none).
    pub team_id: String,
    /// Display name.
    pub name: String,
}

impl TeamRef {
    /// Creates a team reference.
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
        }
    }
}

/// A group of teams playing a round-robin among themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group number (1-based, unique).
    pub number: u32,
    /// Teams in the order used for pairing.
    pub teams: Vec<Team>,
}

impl Group {
    /// Creates an empty group.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            teams: Vec::new(),
        }
    }

    /// Adds a team.
    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    /// Adds several teams.
    pub fn with_teams(mut self, teams: impl IntoIterator<Item = Team>) -> Self {
        self.teams.extend(teams);
        self
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Fixtures a full round-robin of this group produces.
    pub fn round_robin_size(&self) -> usize {
        round_robin_size(self.teams.len())
    }
}

/// Number of pairings in a round-robin of `teams` teams: n(n-1)/2.
#[inline]
pub fn round_robin_size(teams: usize) -> usize {
    teams * teams.saturating_sub(1) / 2
}

/// Partitions teams into groups by their `group` field.
///
/// Groups come back in ascending number; teams keep their input order
/// within a group. Teams without a group are left out.
pub fn group_teams(teams: &[Team]) -> Vec<Group> {
    let mut groups: BTreeMap<u32, Group> = BTreeMap::new();
    for team in teams {
        match team.group {
            Some(number) => groups
                .entry(number)
                .or_insert_with(|| Group::new(number))
                .teams
                .push(team.clone()),
            None => tracing::warn!(team = %team.name, "Team has no group, skipping"),
        }
    }
    groups.into_values().collect()
}
