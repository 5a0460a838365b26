//! Error types for planning operations.
//!
//! The scheduling core only fails in one way: distributing a plan that
//! does not pass validation. Wall-clock scheduling fails only when a
//! kick-off overflows the calendar. The remaining variants belong to the
//! workflow layer.

use thiserror::Error;

use crate::validation::Finding;

/// Error type for planning operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The plan handed to slot distribution failed validation.
    #[error("Validation failed: {}", summarize(.findings))]
    ValidationFailed {
        /// Every finding reported by the validator.
        findings: Vec<Finding>,
    },

    /// A fixture references a team that is not part of the supplied team set.
    #[error("No team found for id '{0}'")]
    MappingFailed(String),

    /// A group would produce more fixtures than the configured bound.
    #[error("Group {group} would produce {fixtures} fixtures (limit {limit})")]
    FixtureLimitExceeded {
        /// Offending group number.
        group: u32,
        /// Fixture count the group would produce.
        fixtures: usize,
        /// Configured upper bound.
        limit: usize,
    },

    /// A kick-off time falls outside the representable calendar.
    #[error("Kick-off of slot {slot} is out of range")]
    ScheduleOutOfRange {
        /// Slot whose kick-off overflowed.
        slot: u32,
    },

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Findings carried by a validation failure (empty for other variants).
    pub fn findings(&self) -> &[Finding] {
        match self {
            Error::ValidationFailed { findings } => findings,
            _ => &[],
        }
    }
}

fn summarize(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, Error>;
