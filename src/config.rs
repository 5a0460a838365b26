//! Planner configuration.
//!
//! Loaded from JSON; every field is optional and falls back to its
//! default.
//!
//! ```json
//! {
//!   "number_of_pitches": 2,
//!   "play_time_minutes": 45,
//!   "break_minutes": 5,
//!   "start": "2024-06-01T12:00:00"
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scheduler::{ScheduleOptions, DEFAULT_LOCATION};

/// Fixture bound per group: a round-robin of 100 teams.
pub const DEFAULT_MAX_FIXTURES_PER_GROUP: usize = 4950;

/// Configuration of a tournament planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Pitches available at the same time.
    pub number_of_pitches: usize,
    /// Play time per fixture in minutes.
    pub play_time_minutes: u32,
    /// Break between slots in minutes.
    pub break_minutes: u32,
    /// Location written on scheduled fixtures.
    pub location: String,
    /// Kick-off of the first slot. Without it fixtures get slots only.
    pub start: Option<NaiveDateTime>,
    /// Upper bound on the fixtures one group may produce.
    pub max_fixtures_per_group: usize,
}

impl SchedulerConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self {
            number_of_pitches: 1,
            play_time_minutes: 45,
            break_minutes: 5,
            location: DEFAULT_LOCATION.to_string(),
            start: None,
            max_fixtures_per_group: DEFAULT_MAX_FIXTURES_PER_GROUP,
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of pitches.
    pub fn with_pitches(mut self, number_of_pitches: usize) -> Self {
        self.number_of_pitches = number_of_pitches;
        self
    }

    /// Sets play time and break in minutes.
    pub fn with_timing(mut self, play_time_minutes: u32, break_minutes: u32) -> Self {
        self.play_time_minutes = play_time_minutes;
        self.break_minutes = break_minutes;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the kick-off of the first slot.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the fixture bound per group.
    pub fn with_max_fixtures_per_group(mut self, max: usize) -> Self {
        self.max_fixtures_per_group = max;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_pitches == 0 {
            return Err(Error::InvalidConfig(
                "number_of_pitches must be at least 1".into(),
            ));
        }
        if self.play_time_minutes == 0 {
            return Err(Error::InvalidConfig(
                "play_time_minutes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Wall-clock options, if a start time is configured.
    pub fn schedule_options(&self) -> Option<ScheduleOptions> {
        self.start.map(|start| {
            ScheduleOptions::new(start, self.play_time_minutes)
                .with_break(self.break_minutes)
                .with_location(self.location.clone())
        })
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}
