//! Tournament fixture scheduling.
//!
//! Generates round-robin fixtures for groups of teams and distributes
//! them over time slots on a bounded number of pitches.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Group`, `Fixture`, `MatchPlan`
//! - **`generator`**: Deterministic round-robin fixture order
//! - **`validation`**: Plan checks (fixture counts, pairings, slot conflicts)
//! - **`scheduler`**: Slot distribution with swap repair, wall clock, KPIs
//! - **`workflow`**: End-to-end planning from a flat team list
//! - **`config`**: JSON-loadable planner configuration
//!
//! # Example
//!
//! ```
//! use tournament_scheduler::generator::FixtureGenerator;
//! use tournament_scheduler::models::{Group, Team};
//! use tournament_scheduler::scheduler::SlotDistributor;
//! use tournament_scheduler::validation::PlanValidator;
//!
//! let group = Group::new(1).with_teams(
//!     ["a", "b", "c", "d", "e"].map(|id| Team::new(id, id.to_uppercase())),
//! );
//! let plan = FixtureGenerator::new().generate(&[group]);
//! assert_eq!(plan.fixture_count(), 10);
//!
//! let distributed = SlotDistributor::new().distribute(&plan, 2).unwrap();
//! assert!(!PlanValidator::new().has_slot_conflicts(&distributed));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workflow;

pub use error::{Error, Result};
