//! Property-based tests for fixture generation and slot distribution.
//!
//! Uses proptest to generate random tournaments and verify invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use tournament_scheduler::generator::FixtureGenerator;
use tournament_scheduler::models::{Fixture, Group, MatchPlan, Team, TeamRef};
use tournament_scheduler::scheduler::{PlanKpi, SlotDistributor};
use tournament_scheduler::validation::PlanValidator;

fn group(number: u32, ids: &[String]) -> Group {
    Group::new(number).with_teams(ids.iter().map(|id| Team::new(id.clone(), id.to_uppercase())))
}

fn team_ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

/// Round-robin in plain `(i, j)` order, numbered 1..
fn canonical_plan(count: usize) -> MatchPlan {
    let refs: Vec<TeamRef> = (0..count)
        .map(|i| TeamRef::new(i.to_string(), format!("Team {i}")))
        .collect();
    let mut number = 0;
    let fixtures = (0..count)
        .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
        .map(|(i, j)| {
            number += 1;
            Fixture::new(format!("F{number}"), number, 1, refs[i].clone(), refs[j].clone())
        })
        .collect();
    MatchPlan::from_fixtures(fixtures)
}

fn no_team_twice_per_slot(plan: &MatchPlan) -> bool {
    (1..=plan.slot_count()).all(|slot| {
        let fixtures = plan.fixtures_in_slot(slot);
        let mut seen = HashSet::new();
        let distinct = fixtures
            .iter()
            .flat_map(|f| f.team_ids())
            .all(|id| seen.insert(id));
        distinct
    })
}

/// Strategy for shuffled team orders of 2-16 teams.
fn shuffled_teams() -> impl Strategy<Value = Vec<String>> {
    (2usize..=16).prop_flat_map(|n| Just(team_ids("t", n)).prop_shuffle())
}

/// Strategy for 1-4 group sizes of 2-8 teams.
fn group_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(2usize..=8, 1..=4)
}

proptest! {
    /// Property: every pair of a group meets exactly once.
    #[test]
    fn generated_round_robin_is_complete(ids in shuffled_teams()) {
        let n = ids.len();
        let plan = FixtureGenerator::new().generate(&[group(1, &ids)]);
        prop_assert_eq!(plan.fixture_count(), n * (n - 1) / 2);

        let mut pairs = HashSet::new();
        for f in &plan.fixtures {
            prop_assert!(!f.is_self_pairing());
            let mut key = [f.team.team_id.clone(), f.opponent.team_id.clone()];
            key.sort();
            prop_assert!(pairs.insert(key));
        }
        prop_assert!(PlanValidator::new().validate(&plan).is_empty());
    }

    /// Property: several groups produce a valid plan in play order.
    #[test]
    fn generated_groups_are_valid_and_ordered(sizes in group_sizes()) {
        let groups: Vec<Group> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| group(i as u32 + 1, &team_ids(&format!("g{i}t"), size)))
            .collect();
        let plan = FixtureGenerator::new().generate(&groups);

        let expected: usize = sizes.iter().map(|n| n * (n - 1) / 2).sum();
        prop_assert_eq!(plan.fixture_count(), expected);
        prop_assert!(plan.fixtures.windows(2).all(|w| w[0].number <= w[1].number));
        prop_assert!(PlanValidator::new().validate(&plan).is_empty());
    }

    /// Property: distribution stays within the pitch count and never puts
    /// a team in a slot twice.
    #[test]
    fn distribution_respects_capacity(teams in 4usize..=16, pitches in 1usize..=5) {
        let plan = FixtureGenerator::new().generate(&[group(1, &team_ids("t", teams))]);
        let result = SlotDistributor::new().distribute(&plan, pitches).unwrap();

        prop_assert_eq!(result.fixture_count(), plan.fixture_count());
        prop_assert_eq!(result.unslotted_count(), 0);
        for slot in 1..=result.slot_count() {
            prop_assert!(result.fixtures_in_slot(slot).len() <= pitches);
        }
        prop_assert!(no_team_twice_per_slot(&result));
        prop_assert!(PlanValidator::new().validate(&result).is_empty());

        let kpi = PlanKpi::calculate(&result, pitches);
        prop_assert!(kpi.pitch_utilization <= 1.0);
    }

    /// Property: distribution of several groups yields no slot conflicts.
    #[test]
    fn distribution_of_groups_is_conflict_free(sizes in group_sizes(), pitches in 1usize..=4) {
        let groups: Vec<Group> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| group(i as u32 + 1, &team_ids(&format!("g{i}t"), size)))
            .collect();
        let plan = FixtureGenerator::new().generate(&groups);
        let result = SlotDistributor::new().distribute(&plan, pitches).unwrap();

        prop_assert_eq!(result.unslotted_count(), 0);
        prop_assert!(!PlanValidator::new().has_slot_conflicts(&result));
    }

    /// Property: plans in plain pairing order distribute cleanly too.
    #[test]
    fn canonical_order_distributes(teams in 4usize..=12, pitches in 1usize..=3) {
        let result = SlotDistributor::new()
            .distribute(&canonical_plan(teams), pitches)
            .unwrap();
        prop_assert_eq!(result.unslotted_count(), 0);
        prop_assert!(no_team_twice_per_slot(&result));
    }

    /// Property: three teams or fewer play one fixture per slot.
    #[test]
    fn small_tournaments_play_sequentially(teams in 2usize..=3, pitches in 1usize..=6) {
        let plan = FixtureGenerator::new().generate(&[group(1, &team_ids("t", teams))]);
        let result = SlotDistributor::new().distribute(&plan, pitches).unwrap();

        let slots: Vec<u32> = result.fixtures.iter().filter_map(|f| f.slot).collect();
        let expected: Vec<u32> = (1..=plan.fixture_count() as u32).collect();
        prop_assert_eq!(slots, expected);
    }
}
