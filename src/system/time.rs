//! Time keeping module for PineTime
//!
//! The PineTime has no battery backed RTC, so wall-clock time is a reference
//! point (set at build time or later by a companion app) advanced by the
//! uptime of the time driver.

use core::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Uptime at which `time` was valid
    uptime: Duration,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::UNIX_EPOCH,
            uptime: Duration::ZERO,
        }
    }
}

impl TimeReference {
    /// Create new time reference from a local date and time
    pub fn from_datetime(time: NaiveDateTime, uptime: Duration) -> Self {
        Self { time, uptime }
    }

    /// Create new time reference from a UNIX timestamp, shifted into local time
    pub fn from_epoch(epoch_secs: i64, offset: FixedOffset, uptime: Duration) -> Option<Self> {
        let utc = DateTime::from_timestamp(epoch_secs, 0)?.naive_utc();
        Some(Self {
            time: offset.from_utc_datetime(&utc).naive_local(),
            uptime,
        })
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Get current local time at the given uptime
    ///
    /// Uptimes before the reference point yield the reference time itself.
    pub fn get_time(&self, uptime: Duration) -> NaiveDateTime {
        let elapsed = uptime.saturating_sub(self.reference.uptime);
        let secs = i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX);
        TimeDelta::try_seconds(secs)
            .and_then(|delta| self.reference.time.checked_add_signed(delta))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        self.reference = reference;
    }
}
