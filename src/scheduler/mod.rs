//! Slot distribution, wall-clock scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `SlotDistributor` places fixtures greedily into numbered slots, at
//! most one fixture per pitch and never the same team twice in a slot.
//! When only one fixture is left and it conflicts, it is repaired by
//! trading slots with an earlier fixture instead of searching.
//!
//! `WallClockScheduler` turns slot numbers into kick-off times.
//!
//! # KPI
//!
//! `PlanKpi` reports slot count, pitch utilization and idle slots per
//! team.

mod distribution;
mod kpi;
mod wall_clock;

pub use distribution::{effective_capacity, SlotDistributor};
pub use kpi::PlanKpi;
pub use wall_clock::{ScheduleOptions, WallClockScheduler, DEFAULT_LOCATION};
