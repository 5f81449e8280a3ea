//! PineTime specific parts of the firmware

use embassy_time::Instant;

pub(crate) mod battery;
pub(crate) mod display;
pub(crate) mod host;

/// Time since boot as measured by the embassy time driver
pub(crate) fn uptime() -> core::time::Duration {
    core::time::Duration::from_micros(Instant::now().as_micros())
}
