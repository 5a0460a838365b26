//! Match plan quality metrics (KPIs).
//!
//! Computes indicators of how well a distributed plan uses the pitches
//! and how evenly it spreads each team's games.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot count | Highest slot in use |
//! | Fixtures per slot | Slotted fixtures / slot count |
//! | Pitch utilization | Slotted fixtures / (slot count × capacity) |
//! | Idle slots | Slots a team sits out between two of its games |

use std::collections::HashMap;

use serde::Serialize;

use super::distribution::effective_capacity;
use crate::models::MatchPlan;

/// Match plan performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct PlanKpi {
    /// Number of fixtures in the plan.
    pub fixture_count: usize,
    /// Number of fixtures without a slot.
    pub unslotted_count: usize,
    /// Highest slot number in use.
    pub slot_count: u32,
    /// Fixtures per slot the distributor may use.
    pub capacity: usize,
    /// Average slotted fixtures per slot.
    pub avg_fixtures_per_slot: f64,
    /// Fraction of pitch-slots in use (0.0..1.0).
    pub pitch_utilization: f64,
    /// Longest run of idle slots between two games, per team.
    pub idle_slots_by_team: HashMap<String, u32>,
    /// Longest idle run of any team.
    pub max_idle_slots: u32,
}

impl PlanKpi {
    /// Computes KPIs for a plan distributed over `number_of_pitches`.
    pub fn calculate(plan: &MatchPlan, number_of_pitches: usize) -> Self {
        let capacity = effective_capacity(plan.team_ids().len(), number_of_pitches);
        let slot_count = plan.slot_count();
        let unslotted_count = plan.unslotted_count();
        let slotted = plan.fixture_count() - unslotted_count;

        let (avg_fixtures_per_slot, pitch_utilization) = if slot_count == 0 {
            (0.0, 0.0)
        } else {
            let slots = f64::from(slot_count);
            (
                slotted as f64 / slots,
                slotted as f64 / (slots * capacity as f64),
            )
        };

        let mut appearances: HashMap<&str, Vec<u32>> = HashMap::new();
        for fixture in &plan.fixtures {
            if let Some(slot) = fixture.slot {
                for id in fixture.team_ids() {
                    appearances.entry(id).or_default().push(slot);
                }
            }
        }

        let idle_slots_by_team: HashMap<String, u32> = appearances
            .into_iter()
            .map(|(id, mut slots)| {
                slots.sort_unstable();
                let longest = slots
                    .windows(2)
                    .map(|w| w[1].saturating_sub(w[0]).saturating_sub(1))
                    .max()
                    .unwrap_or(0);
                (id.to_string(), longest)
            })
            .collect();
        let max_idle_slots = idle_slots_by_team.values().copied().max().unwrap_or(0);

        Self {
            fixture_count: plan.fixture_count(),
            unslotted_count,
            slot_count,
            capacity,
            avg_fixtures_per_slot,
            pitch_utilization,
            idle_slots_by_team,
            max_idle_slots,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_idle_slots: u32, min_utilization: f64) -> bool {
        self.unslotted_count == 0
            && self.max_idle_slots <= max_idle_slots
            && self.pitch_utilization >= min_utilization
    }
}
