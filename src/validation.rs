//! Match plan validation.
//!
//! Checks structural and combinatorial integrity of a fixture list
//! before it is distributed over slots. Detects:
//! - Empty plans
//! - Teams appearing in more than one group
//! - Duplicate pairings within a group (either orientation)
//! - Teams paired with themselves
//! - Fixture counts that do not match a full round-robin
//! - Teams playing twice in the same slot
//!
//! All checks run independently; the validator never fails, it reports.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{round_robin_size, Fixture, MatchPlan};

/// A validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding category.
    pub kind: FindingKind,
    /// Human-readable description.
    pub message: String,
    /// Offending fixtures.
    pub fixtures: Vec<Fixture>,
    /// Group the finding applies to.
    pub group: Option<u32>,
    /// Offending team ids.
    pub team_ids: Vec<String>,
}

/// Categories of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    /// The plan has no fixtures.
    EmptyPlan,
    /// A team id appears in fixtures of more than one group.
    TeamAcrossGroups,
    /// A group's fixture count differs from n(n-1)/2.
    WrongFixtureCount,
    /// The same two teams meet more than once in a group.
    DuplicatePairing,
    /// A fixture pairs a team with itself.
    SelfPairing,
    /// Two fixtures in the same slot share a team.
    SlotConflict,
}

impl Finding {
    fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fixtures: Vec::new(),
            group: None,
            team_ids: Vec::new(),
        }
    }

    fn in_group(mut self, group: u32) -> Self {
        self.group = Some(group);
        self
    }

    fn with_fixtures(mut self, fixtures: Vec<Fixture>) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Creates an empty plan finding.
    pub fn empty_plan() -> Self {
        Self::new(FindingKind::EmptyPlan, "Match plan is empty.")
    }

    /// Creates a finding for a team playing in several groups.
    pub fn team_across_groups(team_id: impl Into<String>) -> Self {
        let mut finding = Self::new(
            FindingKind::TeamAcrossGroups,
            "Team can not be part of several groups.",
        );
        finding.team_ids.push(team_id.into());
        finding
    }

    /// Creates a wrong fixture count finding for a group.
    pub fn wrong_fixture_count(group: u32, fixtures: Vec<Fixture>) -> Self {
        Self::new(
            FindingKind::WrongFixtureCount,
            "Number of games does not match number of teams in group.",
        )
        .in_group(group)
        .with_fixtures(fixtures)
    }

    /// Creates a duplicate pairing finding for a group.
    pub fn duplicate_pairing(group: u32, fixtures: Vec<Fixture>) -> Self {
        Self::new(
            FindingKind::DuplicatePairing,
            "Combination of teams is not possible.",
        )
        .in_group(group)
        .with_fixtures(fixtures)
    }

    /// Creates a self pairing finding for one fixture.
    pub fn self_pairing(fixture: Fixture) -> Self {
        let mut finding = Self::new(FindingKind::SelfPairing, "Both teams in game have equal id")
            .in_group(fixture.group);
        finding.team_ids.push(fixture.team.team_id.clone());
        finding.fixtures.push(fixture);
        finding
    }

    /// Creates a slot conflict finding for a group.
    pub fn slot_conflict(group: u32, fixtures: Vec<Fixture>) -> Self {
        Self::new(FindingKind::SlotConflict, "Combination of games is invalid.")
            .in_group(group)
            .with_fixtures(fixtures)
    }
}

/// Match plan validator.
///
/// Stateless and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct PlanValidator;

impl PlanValidator {
    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a match plan.
    ///
    /// Findings are ordered: empty plan, teams across groups (in order of
    /// first appearance), then for each group in ascending number:
    /// duplicate pairings, self pairings, fixture count, slot conflicts.
    ///
    /// Slot conflicts are checked within each group only; a conflict
    /// between fixtures of different groups never yields a `SlotConflict`
    /// finding. Such a conflict needs a team shared across groups, which
    /// is reported as `TeamAcrossGroups`. Use
    /// [`has_slot_conflicts`](Self::has_slot_conflicts) for a check over
    /// the whole plan.
    ///
    /// # Returns
    /// All findings; an empty list means the plan is valid.
    pub fn validate(&self, plan: &MatchPlan) -> Vec<Finding> {
        let mut findings = Vec::new();

        if plan.is_empty() {
            findings.push(Finding::empty_plan());
        }

        let groups = plan.group_numbers();

        // Distinct non-empty team ids per group, then across groups.
        let per_group: Vec<Vec<&str>> = groups
            .iter()
            .map(|&g| distinct_team_ids(plan.fixtures.iter().filter(|f| f.group == g)))
            .collect();
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for &id in per_group.iter().flatten() {
            *occurrences.entry(id).or_insert(0) += 1;
        }
        let mut reported = HashSet::new();
        for &id in per_group.iter().flatten() {
            if occurrences[id] > 1 && reported.insert(id) {
                findings.push(Finding::team_across_groups(id));
            }
        }

        for (&group, team_ids) in groups.iter().zip(&per_group) {
            let fixtures: Vec<&Fixture> = plan.fixtures_in_group(group);

            let duplicates: Vec<Fixture> = fixtures
                .iter()
                .enumerate()
                .filter(|(i, f)| {
                    fixtures
                        .iter()
                        .enumerate()
                        .any(|(j, g)| *i != j && f.same_pairing(g))
                })
                .map(|(_, f)| (*f).clone())
                .collect();
            if !duplicates.is_empty() {
                findings.push(Finding::duplicate_pairing(group, duplicates));
            }

            for fixture in fixtures.iter().filter(|f| f.is_self_pairing()) {
                findings.push(Finding::self_pairing((*fixture).clone()));
            }

            if fixtures.len() != round_robin_size(team_ids.len()) {
                findings.push(Finding::wrong_fixture_count(
                    group,
                    fixtures.iter().map(|f| (*f).clone()).collect(),
                ));
            }

            let owned: Vec<Fixture> = fixtures.iter().map(|f| (*f).clone()).collect();
            let conflicts = self.find_slot_conflicts(&owned);
            if !conflicts.is_empty() {
                findings.push(Finding::slot_conflict(group, conflicts));
            }
        }

        findings
    }

    /// Returns the fixtures, in input order, that share a slot and at
    /// least one team with another fixture. Unslotted fixtures never
    /// conflict.
    pub fn find_slot_conflicts(&self, fixtures: &[Fixture]) -> Vec<Fixture> {
        let mut by_slot: HashMap<u32, Vec<usize>> = HashMap::new();
        for (idx, fixture) in fixtures.iter().enumerate() {
            if let Some(slot) = fixture.slot {
                by_slot.entry(slot).or_default().push(idx);
            }
        }

        let mut conflicting = vec![false; fixtures.len()];
        for members in by_slot.values() {
            for (pos, &a) in members.iter().enumerate() {
                for &b in &members[pos + 1..] {
                    if fixtures[a].shares_team_with(&fixtures[b]) {
                        conflicting[a] = true;
                        conflicting[b] = true;
                    }
                }
            }
        }

        fixtures
            .iter()
            .zip(conflicting)
            .filter(|(_, c)| *c)
            .map(|(f, _)| f.clone())
            .collect()
    }

    /// Whether any two fixtures of the plan share a slot and a team.
    pub fn has_slot_conflicts(&self, plan: &MatchPlan) -> bool {
        !self.find_slot_conflicts(&plan.fixtures).is_empty()
    }
}

fn distinct_team_ids<'a>(fixtures: impl Iterator<Item = &'a Fixture>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for id in fixtures.flat_map(|f| f.team_ids()) {
        if !id.is_empty() && seen.insert(id) {
            ids.push(id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FixtureGenerator;
    use crate::models::{Group, Team, TeamRef};

    fn fixture(id: &str, group: u32, a: &str, b: &str, slot: Option<u32>) -> Fixture {
        let mut f = Fixture::new(id, 1, group, TeamRef::new(a, a), TeamRef::new(b, b));
        f.slot = slot;
        f
    }

    fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
        findings.iter().map(|f| f.kind).collect()
    }

    fn generated(groups: &[(u32, &[&str])]) -> MatchPlan {
        let groups: Vec<Group> = groups
            .iter()
            .map(|(n, ids)| Group::new(*n).with_teams(ids.iter().map(|id| Team::new(*id, *id))))
            .collect();
        FixtureGenerator::new().generate(&groups)
    }

    #[test]
    fn test_generated_plan_is_valid() {
        let plan = generated(&[(1, &["a", "b", "c", "d"]), (2, &["e", "f", "g"])]);
        assert!(PlanValidator::new().validate(&plan).is_empty());
    }

    #[test]
    fn test_empty_plan() {
        let findings = PlanValidator::new().validate(&MatchPlan::new());
        assert_eq!(kinds(&findings), vec![FindingKind::EmptyPlan]);
        assert_eq!(findings[0].message, "Match plan is empty.");
    }

    #[test]
    fn test_team_across_groups_reported_once() {
        let plan = MatchPlan::from_fixtures(vec![
            fixture("F1", 1, "a", "b", None),
            fixture("F2", 2, "a", "c", None),
        ]);
        let findings = PlanValidator::new().validate(&plan);
        let across: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.kind == FindingKind::TeamAcrossGroups)
            .collect();
        assert_eq!(across.len(), 1);
        assert_eq!(across[0].team_ids, vec!["a"]);
        assert!(across[0].fixtures.is_empty());
    }

    #[test]
    fn test_team_across_groups_first_appearance_order() {
        let plan = MatchPlan::from_fixtures(vec![
            fixture("F1", 1, "a", "b", None),
            fixture("F2", 2, "b", "a", None),
        ]);
        let findings = PlanValidator::new().validate(&plan);
        let ids: Vec<&str> = findings
            .iter()
            .filter(|f| f.kind == FindingKind::TeamAcrossGroups)
            .map(|f| f.team_ids[0].as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_pairing_is_symmetric() {
        let plan = MatchPlan::from_fixtures(vec![
            fixture("F1", 1, "a", "b", None),
            fixture("F2", 1, "b", "a", None),
        ]);
        let findings = PlanValidator::new().validate(&plan);
        assert_eq!(
            kinds(&findings),
            vec![FindingKind::DuplicatePairing, FindingKind::WrongFixtureCount]
        );
        assert_eq!(findings[0].fixtures.len(), 2);
        assert_eq!(findings[0].group, Some(1));
    }

    #[test]
    fn test_self_pairing() {
        let plan = MatchPlan::from_fixtures(vec![fixture("F1", 1, "a", "a", None)]);
        let findings = PlanValidator::new().validate(&plan);
        // One distinct team expects zero fixtures.
        assert_eq!(
            kinds(&findings),
            vec![FindingKind::SelfPairing, FindingKind::WrongFixtureCount]
        );
        assert_eq!(findings[0].message, "Both teams in game have equal id");
        assert_eq!(findings[0].team_ids, vec!["a"]);
        assert_eq!(findings[0].fixtures[0].id, "F1");
    }

    #[test]
    fn test_wrong_fixture_count() {
        let mut plan = generated(&[(1, &["a", "b", "c", "d"])]);
        plan.fixtures.pop();
        let findings = PlanValidator::new().validate(&plan);
        assert_eq!(kinds(&findings), vec![FindingKind::WrongFixtureCount]);
        assert_eq!(findings[0].fixtures.len(), 5);
        assert_eq!(findings[0].group, Some(1));
    }

    #[test]
    fn test_slot_conflict_in_plan() {
        let plan = MatchPlan::from_fixtures(vec![
            fixture("F1", 1, "a", "b", Some(1)),
            fixture("F2", 1, "b", "c", Some(1)),
            fixture("F3", 1, "a", "c", Some(2)),
        ]);
        let findings = PlanValidator::new().validate(&plan);
        assert_eq!(kinds(&findings), vec![FindingKind::SlotConflict]);
        let ids: Vec<&str> = findings[0].fixtures.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["F1", "F2"]);
        assert!(PlanValidator::new().has_slot_conflicts(&plan));
    }

    #[test]
    fn test_find_slot_conflicts_four_teams() {
        let plan = generated(&[(1, &["0", "1", "2", "3"])]);
        let mut fixtures = plan.fixtures.clone();
        for (f, slot) in fixtures.iter_mut().zip([1, 2, 1, 2, 3, 3]) {
            f.slot = Some(slot);
        }
        // (0,1)s1 (2,3)s2 (0,2)s1 (1,3)s2 (0,3)s3 (1,2)s3
        let conflicts = PlanValidator::new().find_slot_conflicts(&fixtures);
        let expected: Vec<&str> = fixtures[..4].iter().map(|f| f.id.as_str()).collect();
        let got: Vec<&str> = conflicts.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_unslotted_fixtures_never_conflict() {
        let fixtures = vec![
            fixture("F1", 1, "a", "b", None),
            fixture("F2", 1, "a", "c", None),
        ];
        assert!(PlanValidator::new().find_slot_conflicts(&fixtures).is_empty());
    }

    #[test]
    fn test_slot_conflict_across_groups_is_not_a_group_finding() {
        let plan = MatchPlan::from_fixtures(vec![
            fixture("F1", 1, "a", "b", Some(1)),
            fixture("F2", 2, "a", "c", Some(1)),
        ]);
        let validator = PlanValidator::new();
        let findings = validator.validate(&plan);
        assert_eq!(kinds(&findings), vec![FindingKind::TeamAcrossGroups]);
        assert!(validator.has_slot_conflicts(&plan));
    }

    #[test]
    fn test_finding_order_across_groups() {
        let plan = MatchPlan::from_fixtures(vec![
            fixture("F1", 2, "x", "x", None),
            fixture("F2", 1, "a", "b", Some(1)),
            fixture("F3", 1, "a", "c", Some(1)),
            fixture("F4", 1, "b", "c", Some(2)),
        ]);
        let findings = PlanValidator::new().validate(&plan);
        assert_eq!(
            kinds(&findings),
            vec![
                FindingKind::SlotConflict,
                FindingKind::SelfPairing,
                FindingKind::WrongFixtureCount,
            ]
        );
        assert_eq!(findings[0].group, Some(1));
        assert_eq!(findings[1].group, Some(2));
    }
}
