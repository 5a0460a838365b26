//! Wall-clock scheduling.
//!
//! Converts slot numbers into kick-off times. Every slot lasts one play
//! period plus one break, so slot `s` starts at
//! `start + (s - 1) * (play_time + break)`. Fixtures sharing a slot share
//! their kick-off time.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{FixtureSchedule, MatchPlan};

/// Location written when none is configured.
pub const DEFAULT_LOCATION: &str = "First pitch";

/// Timing parameters for wall-clock scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Kick-off of slot 1 (local wall clock).
    pub start: NaiveDateTime,
    /// Play time per fixture in minutes.
    pub play_time_minutes: u32,
    /// Break between consecutive slots in minutes.
    pub break_minutes: u32,
    /// Location written on every fixture.
    pub location: String,
}

impl ScheduleOptions {
    /// Creates options with no break and the default location.
    pub fn new(start: NaiveDateTime, play_time_minutes: u32) -> Self {
        Self {
            start,
            play_time_minutes,
            break_minutes: 0,
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    /// Sets the break between slots.
    pub fn with_break(mut self, break_minutes: u32) -> Self {
        self.break_minutes = break_minutes;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Length of one slot (play time plus break).
    #[inline]
    pub fn slot_length(&self) -> Duration {
        Duration::minutes(i64::from(self.play_time_minutes) + i64::from(self.break_minutes))
    }

    /// Kick-off time of a slot. Slot 0 is treated as slot 1.
    ///
    /// Returns `None` if the kick-off lies outside the representable
    /// date range.
    pub fn slot_start(&self, slot: u32) -> Option<NaiveDateTime> {
        let offset = i64::from(slot.max(1) - 1);
        let minutes = self.slot_length().num_minutes().checked_mul(offset)?;
        self.start.checked_add_signed(Duration::try_minutes(minutes)?)
    }
}

/// Wall-clock scheduler.
#[derive(Debug, Clone, Default)]
pub struct WallClockScheduler;

impl WallClockScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Returns a copy of the plan with a schedule on every fixture.
    ///
    /// Fixtures without a slot are scheduled as slot 1.
    ///
    /// # Errors
    /// `Error::ScheduleOutOfRange` if a kick-off time overflows the
    /// calendar.
    pub fn schedule(&self, plan: &MatchPlan, options: &ScheduleOptions) -> Result<MatchPlan> {
        let mut scheduled = plan.clone();
        for fixture in &mut scheduled.fixtures {
            let slot = fixture.slot.unwrap_or(1);
            let start = options
                .slot_start(slot)
                .ok_or(Error::ScheduleOutOfRange { slot })?;
            fixture.schedule = Some(FixtureSchedule {
                date: start.date(),
                start: start.time(),
                duration_minutes: options.play_time_minutes,
                location: options.location.clone(),
            });
        }

        debug!(
            fixtures = scheduled.fixture_count(),
            start = %options.start,
            slot_minutes = options.slot_length().num_minutes(),
            "Scheduled fixtures"
        );
        Ok(scheduled)
    }
}
