//! Fake host for driving the watchface in tests

use core::convert::Infallible;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use super::host::{
    Accessibility, BatteryService, ClockService, Error, EventSource, HealthMetric, HealthService,
    Host,
};
use crate::peripherals::battery::BatteryInfo;

/// Health source with a fixed answer
pub struct FakeHealth {
    pub accessibility: Accessibility,
    pub steps: u32,
    /// Ranges the watchface asked about
    pub queries: core::cell::RefCell<Vec<(NaiveDateTime, NaiveDateTime)>>,
}

impl HealthService for FakeHealth {
    fn metric_accessible(
        &self,
        _metric: HealthMetric,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Accessibility {
        self.queries.borrow_mut().push((start, end));
        self.accessibility
    }

    fn sum_today(&self, _metric: HealthMetric) -> u32 {
        self.steps
    }
}

pub struct FakeHost {
    pub now: NaiveDateTime,
    pub offset: FixedOffset,
    pub is_24h: bool,
    pub battery: BatteryInfo,
    pub health: Option<FakeHealth>,
    /// Make subscribing to health data fail
    pub health_subscribe_fails: bool,
    pub subscriptions: Vec<EventSource>,
}

impl FakeHost {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            offset: FixedOffset::east_opt(0).unwrap(),
            is_24h: true,
            battery: BatteryInfo::default(),
            health: None,
            health_subscribe_fails: false,
            subscriptions: Vec::new(),
        }
    }

    pub fn with_health(mut self, accessibility: Accessibility, steps: u32) -> Self {
        self.health = Some(FakeHealth {
            accessibility,
            steps,
            queries: core::cell::RefCell::new(Vec::new()),
        });
        self
    }

    pub fn is_subscribed(&self, source: EventSource) -> bool {
        self.subscriptions.contains(&source)
    }
}

impl ClockService for FakeHost {
    fn local_time(&self) -> NaiveDateTime {
        self.now
    }

    fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    fn clock_is_24h_style(&self) -> bool {
        self.is_24h
    }
}

impl BatteryService for FakeHost {
    fn battery_peek(&self) -> BatteryInfo {
        self.battery
    }
}

impl Host for FakeHost {
    type Health = FakeHealth;

    fn health(&self) -> Option<&FakeHealth> {
        self.health.as_ref()
    }

    fn subscribe(&mut self, source: EventSource) -> Result<(), Error> {
        if source == EventSource::Health && self.health_subscribe_fails {
            return Err(Error::Unavailable);
        }
        self.subscriptions.push(source);
        Ok(())
    }

    fn unsubscribe(&mut self, source: EventSource) {
        self.subscriptions.retain(|s| *s != source);
    }
}

/// 2024-03-03 (a Sunday) at the given local time
pub fn datetime(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 3)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// Display of any size that remembers which pixels were written
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
    /// Pixels written since the last `reset_written`
    pub written: Vec<Point>,
}

impl FrameBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb565::BLACK; (size.width * size.height) as usize],
            written: Vec::new(),
        }
    }

    pub fn pixel(&self, point: Point) -> Rgb565 {
        self.pixels[(point.y as u32 * self.size.width + point.x as u32) as usize]
    }

    pub fn reset_written(&mut self) {
        self.written.clear();
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[index] = color;
                self.written.push(point);
            }
        }
        Ok(())
    }
}
