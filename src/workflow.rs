//! Tournament planning workflow.
//!
//! Runs the stages in order: group assembly, fixture generation, slot
//! distribution and, when a start time is configured, wall-clock
//! scheduling. Also maps stored fixtures back onto a team set.

use std::collections::HashMap;

use tracing::info;

use crate::config::SchedulerConfig;
use crate::error::{Error, Result};
use crate::generator::FixtureGenerator;
use crate::models::{group_teams, Group, MatchPlan, Team, TeamRef};
use crate::scheduler::{SlotDistributor, WallClockScheduler};

/// Tournament planner.
///
/// # Example
///
/// ```
/// use tournament_scheduler::config::SchedulerConfig;
/// use tournament_scheduler::models::Team;
/// use tournament_scheduler::workflow::TournamentPlanner;
///
/// let teams: Vec<Team> = (0..4)
///     .map(|i| Team::new(format!("t{i}"), format!("Team {i}")).with_group(1))
///     .collect();
///
/// let planner = TournamentPlanner::new(SchedulerConfig::new().with_pitches(2));
/// let plan = planner.plan_tournament(&teams).unwrap();
/// assert_eq!(plan.fixture_count(), 6);
/// assert_eq!(plan.slot_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TournamentPlanner {
    config: SchedulerConfig,
    generator: FixtureGenerator,
    distributor: SlotDistributor,
    wall_clock: WallClockScheduler,
}

impl TournamentPlanner {
    /// Creates a planner.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            generator: FixtureGenerator::new(),
            distributor: SlotDistributor::new(),
            wall_clock: WallClockScheduler::new(),
        }
    }

    /// The planner configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates the fixtures of the given groups.
    ///
    /// # Errors
    /// `Error::FixtureLimitExceeded` if a group would produce more
    /// fixtures than `max_fixtures_per_group`.
    pub fn create_plan(&self, groups: &[Group]) -> Result<MatchPlan> {
        let limit = self.config.max_fixtures_per_group;
        if let Some(group) = groups.iter().find(|g| g.round_robin_size() > limit) {
            return Err(Error::FixtureLimitExceeded {
                group: group.number,
                fixtures: group.round_robin_size(),
                limit,
            });
        }

        let plan = self.generator.generate(groups);
        info!(
            groups = groups.len(),
            fixtures = plan.fixture_count(),
            "Created match plan"
        );
        Ok(plan)
    }

    /// Distributes a plan over slots and, with a configured start time,
    /// schedules it on the wall clock.
    ///
    /// # Errors
    /// `Error::ValidationFailed` for an invalid plan,
    /// `Error::ScheduleOutOfRange` if a kick-off overflows the calendar.
    pub fn schedule_plan(&self, plan: &MatchPlan) -> Result<MatchPlan> {
        let distributed = self
            .distributor
            .distribute(plan, self.config.number_of_pitches)?;
        info!(
            fixtures = distributed.fixture_count(),
            slots = distributed.slot_count(),
            pitches = self.config.number_of_pitches,
            "Distributed match plan"
        );

        match self.config.schedule_options() {
            Some(options) => self.wall_clock.schedule(&distributed, &options),
            None => Ok(distributed),
        }
    }

    /// Plans a tournament from a flat team list, grouped by each team's
    /// `group` field.
    pub fn plan_tournament(&self, teams: &[Team]) -> Result<MatchPlan> {
        let groups = group_teams(teams);
        let plan = self.create_plan(&groups)?;
        self.schedule_plan(&plan)
    }

    /// Rebuilds the team references of every fixture from a team set.
    ///
    /// # Errors
    /// `Error::MappingFailed` with the first team id that is not in `teams`.
    pub fn attach_team_names(&self, plan: &MatchPlan, teams: &[Team]) -> Result<MatchPlan> {
        let by_id: HashMap<&str, &Team> = teams
            .iter()
            .filter_map(|t| t.team_id.as_deref().map(|id| (id, t)))
            .collect();
        let lookup = |team: &TeamRef| -> Result<TeamRef> {
            by_id
                .get(team.team_id.as_str())
                .map(|t| t.to_ref())
                .ok_or_else(|| Error::MappingFailed(team.team_id.clone()))
        };

        let mut mapped = plan.clone();
        for fixture in &mut mapped.fixtures {
            fixture.team = lookup(&fixture.team)?;
            fixture.opponent = lookup(&fixture.opponent)?;
        }
        Ok(mapped)
    }
}
