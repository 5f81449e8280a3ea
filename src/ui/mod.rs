//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{geometry::Size, pixelcolor::Rgb565, prelude::DrawTarget};

use crate::{
    peripherals::battery::BatteryInfo,
    system::host::{HealthEvent, Host},
};

pub mod battery_gauge;
pub mod clock;
pub mod colors;
pub mod default_watchface;
pub mod label;
pub mod layout;
pub mod steps;

/// A watchface driven by host events
///
/// The host calls these one at a time from its event loop. Event handlers
/// only update state and mark regions dirty; pixels change in `render`.
pub trait WatchFace {
    /// Create the regions inside a display of `bounds` and subscribe to events
    fn load<H: Host>(&mut self, host: &mut H, bounds: Size);

    /// Release all regions and subscriptions
    fn unload<H: Host>(&mut self, host: &mut H);

    /// Wall-clock tick, once per second
    fn on_tick<H: Host>(&mut self, host: &H, local_time: NaiveDateTime);

    /// Battery charge state changed
    fn on_battery_change(&mut self, info: BatteryInfo);

    /// Health data changed
    fn on_health_event<H: Host>(&mut self, host: &H, event: HealthEvent);

    /// Repaint dirty regions
    fn render<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}
