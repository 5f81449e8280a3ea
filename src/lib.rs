//! Watchface library for the PineTime.
//!
//! Holds everything that does not touch the nRF52 peripherals: the clock
//! formatter, step counter reader, battery gauge and the controller that ties
//! them to the host's tick, battery and health events. The firmware binary
//! (`main.rs`) provides the device host on top of this library.
//!
//! Tests run on the development host:
//! ```bash
//! cargo test --lib
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod peripherals;
pub mod system;
pub mod ui;

pub use peripherals::battery::BatteryInfo;
pub use system::host::{EventSource, HealthEvent, Host};
pub use ui::{default_watchface::DefaultWatchface, WatchFace};
