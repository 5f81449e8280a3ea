//! Watchface host backed by the PineTime hardware

use chrono::{FixedOffset, NaiveDateTime};
use pinetime_watchface::{
    system::{
        config::ClockSettings,
        host::{BatteryService, ClockService, Error, EventSource, Host, NoHealth},
        time::TimeManager,
    },
    BatteryInfo,
};

use super::uptime;

pub struct PineTimeHost {
    clock: TimeManager,
    settings: ClockSettings,
    /// Last charge state reported by the battery task
    battery: BatteryInfo,
    tick_subscribed: bool,
    battery_subscribed: bool,
}

impl PineTimeHost {
    pub fn new(clock: TimeManager, settings: ClockSettings, battery: BatteryInfo) -> Self {
        Self {
            clock,
            settings,
            battery,
            tick_subscribed: false,
            battery_subscribed: false,
        }
    }

    pub fn set_battery(&mut self, info: BatteryInfo) {
        self.battery = info;
    }

    pub fn is_subscribed(&self, source: EventSource) -> bool {
        match source {
            EventSource::SecondTick => self.tick_subscribed,
            EventSource::BatteryState => self.battery_subscribed,
            EventSource::Health => false,
        }
    }
}

impl ClockService for PineTimeHost {
    fn local_time(&self) -> NaiveDateTime {
        self.clock.get_time(uptime())
    }

    fn utc_offset(&self) -> FixedOffset {
        self.settings.utc_offset
    }

    fn clock_is_24h_style(&self) -> bool {
        self.settings.is_24h
    }
}

impl BatteryService for PineTimeHost {
    fn battery_peek(&self) -> BatteryInfo {
        self.battery
    }
}

impl Host for PineTimeHost {
    // No step counting on this firmware yet
    type Health = NoHealth;

    fn health(&self) -> Option<&NoHealth> {
        None
    }

    fn subscribe(&mut self, source: EventSource) -> Result<(), Error> {
        match source {
            EventSource::SecondTick => self.tick_subscribed = true,
            EventSource::BatteryState => self.battery_subscribed = true,
            EventSource::Health => return Err(Error::Unavailable),
        }
        defmt::debug!("Subscribed to {}", source);
        Ok(())
    }

    fn unsubscribe(&mut self, source: EventSource) {
        match source {
            EventSource::SecondTick => self.tick_subscribed = false,
            EventSource::BatteryState => self.battery_subscribed = false,
            EventSource::Health => {}
        }
    }
}
