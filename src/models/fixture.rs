//! Fixture (game) model.
//!
//! A fixture pairs two teams of one group. It is created once by the
//! generator, gets its slot from the distributor and its wall-clock
//! schedule from the wall-clock scheduler.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::team::TeamRef;

/// A single game between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Unique identifier (UUID v4 when generated).
    pub id: String,
    /// Play order within the group (1-based).
    pub number: u32,
    /// Group the fixture belongs to.
    pub group: u32,
    /// Home side.
    pub team: TeamRef,
    /// Away side.
    pub opponent: TeamRef,
    /// Time slot shared by simultaneous fixtures.
    pub slot: Option<u32>,
    /// Wall-clock schedule, once computed.
    pub schedule: Option<FixtureSchedule>,
}

/// Wall-clock placement of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSchedule {
    /// Calendar date of the tournament day.
    pub date: NaiveDate,
    /// Kick-off time.
    pub start: NaiveTime,
    /// Play time in minutes.
    pub duration_minutes: u32,
    /// Pitch or venue label.
    pub location: String,
}

impl Fixture {
    /// Creates an unslotted fixture.
    pub fn new(
        id: impl Into<String>,
        number: u32,
        group: u32,
        team: TeamRef,
        opponent: TeamRef,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            group,
            team,
            opponent,
            slot: None,
            schedule: None,
        }
    }

    /// Both team ids, home side first.
    #[inline]
    pub fn team_ids(&self) -> [&str; 2] {
        [&self.team.team_id, &self.opponent.team_id]
    }

    /// Whether the given team plays in this fixture.
    #[inline]
    pub fn involves(&self, team_id: &str) -> bool {
        self.team.team_id == team_id || self.opponent.team_id == team_id
    }

    /// Whether the two fixtures have at least one team in common.
    pub fn shares_team_with(&self, other: &Fixture) -> bool {
        other.involves(&self.team.team_id) || other.involves(&self.opponent.team_id)
    }

    /// Whether both sides are the same team.
    #[inline]
    pub fn is_self_pairing(&self) -> bool {
        self.team.team_id == self.opponent.team_id
    }

    /// Whether the fixtures pair the same two teams, in either orientation.
    pub fn same_pairing(&self, other: &Fixture) -> bool {
        (self.team.team_id == other.team.team_id
            && self.opponent.team_id == other.opponent.team_id)
            || (self.team.team_id == other.opponent.team_id
                && self.opponent.team_id == other.team.team_id)
    }
}
