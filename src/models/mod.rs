//! Tournament domain models.
//!
//! Teams are partitioned into groups; each group plays a round-robin of
//! fixtures, collected in a match plan. Slots and wall-clock schedules
//! are attached to fixtures by the scheduler.
//!
//! # Lifecycle
//!
//! | Stage | Produces |
//! |-------|----------|
//! | `group_teams` | `Group` list |
//! | `FixtureGenerator` | `MatchPlan` without slots |
//! | `SlotDistributor` | `Fixture::slot` |
//! | `WallClockScheduler` | `Fixture::schedule` |

mod fixture;
mod plan;
mod team;

pub use fixture::{Fixture, FixtureSchedule};
pub use plan::MatchPlan;
pub use team::{group_teams, round_robin_size, Group, Team, TeamRef};
