//! Host services consumed by the watchface
//!
//! The watchface never talks to hardware directly. Whatever runs it (the
//! PineTime firmware, a test double) implements [`Host`] and forwards its
//! events to the controller.

use chrono::{FixedOffset, NaiveDateTime};

use crate::peripherals::battery::BatteryInfo;

/// Event streams the watchface can subscribe to
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// Wall-clock tick, once per second
    SecondTick,
    /// Battery charge state changes
    BatteryState,
    /// Health data changes
    Health,
}

/// Kinds of health data change notifications
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    /// Several metrics changed at once (e.g. after a resync)
    SignificantUpdate,
    /// Movement data (steps, distance) changed
    MovementUpdate,
    /// Sleep data changed
    SleepUpdate,
}

/// Metrics a health source can aggregate
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthMetric {
    StepCount,
}

/// Whether a metric can be queried for a time range
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    /// Data is recorded for the range
    Available,
    /// Nothing recorded for the range yet
    NotAvailable,
    /// The user denied access to the metric
    NoPermission,
    /// The metric does not exist on this device
    NotSupported,
}

impl Accessibility {
    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

/// Wall clock and clock preferences of the host
pub trait ClockService {
    /// Current local wall-clock time
    fn local_time(&self) -> NaiveDateTime;

    /// Offset of local time from UTC
    fn utc_offset(&self) -> FixedOffset;

    /// Whether the user prefers a 24 hour clock
    fn clock_is_24h_style(&self) -> bool;
}

/// Battery state source
pub trait BatteryService {
    /// Read the current charge state without waiting for a change event
    fn battery_peek(&self) -> BatteryInfo;
}

/// Aggregated activity metrics
pub trait HealthService {
    /// Check whether `metric` has data for the range `start..=end`
    fn metric_accessible(
        &self,
        metric: HealthMetric,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Accessibility;

    /// Sum of `metric` since the start of today
    fn sum_today(&self, metric: HealthMetric) -> u32;
}

/// Health source of hosts without any activity tracking
///
/// Uninhabited, so `Host::health` can only ever return `None` for it.
pub enum NoHealth {}

impl HealthService for NoHealth {
    fn metric_accessible(&self, _: HealthMetric, _: NaiveDateTime, _: NaiveDateTime) -> Accessibility {
        match *self {}
    }

    fn sum_today(&self, _: HealthMetric) -> u32 {
        match *self {}
    }
}

/// Everything the watchface needs from the platform it runs on
pub trait Host: ClockService + BatteryService {
    type Health: HealthService;

    /// Health source, or `None` if the platform has no health capability
    fn health(&self) -> Option<&Self::Health>;

    /// Start delivering events of `source`
    fn subscribe(&mut self, source: EventSource) -> Result<(), Error>;

    /// Stop delivering events of `source`
    fn unsubscribe(&mut self, source: EventSource);
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The event source cannot be subscribed to on this host
    Unavailable,
}
