//! Step counter

use core::fmt;

use chrono::{NaiveDateTime, NaiveTime};

use crate::system::host::{HealthMetric, HealthService};

/// Step total as `4321 steps`
pub struct StepCount(pub u32);

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps", self.0)
    }
}

/// Read today's step count
///
/// Returns `None` if the health source has no step data between midnight and
/// `now`, e.g. on a fresh day.
pub fn read_steps<H: HealthService>(health: &H, now: NaiveDateTime) -> Option<StepCount> {
    let metric = HealthMetric::StepCount;
    let start = now.date().and_time(NaiveTime::MIN);

    if health.metric_accessible(metric, start, now).is_available() {
        Some(StepCount(health.sum_today(metric)))
    } else {
        None
    }
}
