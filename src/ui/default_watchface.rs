//! Default watchface
//!
//! Local time, UTC time, date, a battery gauge and today's steps, stacked
//! top to bottom. The face is either unloaded (no regions, no subscriptions)
//! or loaded (regions exist, subscriptions active).

use core::{fmt, mem};

use chrono::{FixedOffset, NaiveDateTime};
use embedded_graphics::{
    geometry::Size,
    mono_font::{
        ascii::{FONT_10X20, FONT_9X18_BOLD},
        MonoFont,
    },
    pixelcolor::Rgb565,
    prelude::DrawTarget,
    text::Alignment,
};
use profont::PROFONT_24_POINT;

use super::{
    battery_gauge::BatteryGauge,
    clock::{self, DisplayDate, LocalTime, UtcTime},
    label::{Label, LabelStyle},
    layout::Layout,
    steps, WatchFace,
};
use crate::{
    peripherals::battery::BatteryInfo,
    system::{
        config::WatchfaceConfig,
        host::{EventSource, HealthEvent, Host},
    },
};

/// Text regions of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRegion {
    Time,
    Utc,
    Date,
    Steps,
}

/// Regions that exist while the face is loaded
struct Layers {
    time: Label,
    utc: Label,
    date: Label,
    steps: Label,
    battery: BatteryGauge,
    /// Whether health events were subscribed and need unsubscribing
    health_subscribed: bool,
    /// Whether the first render cleared the whole display
    cleared: bool,
}

impl Layers {
    fn new(layout: &Layout, config: &WatchfaceConfig) -> Self {
        let style = |font: &'static MonoFont<'static>| LabelStyle {
            font,
            text_color: config.text_color,
            background_color: config.background,
            alignment: Alignment::Center,
        };

        Self {
            time: Label::new(layout.time, style(&PROFONT_24_POINT)),
            utc: Label::new(layout.utc, style(&FONT_10X20)),
            date: Label::new(layout.date, style(&FONT_10X20)),
            steps: Label::new(layout.steps, style(&FONT_9X18_BOLD)),
            battery: BatteryGauge::new(layout.gauge, BatteryInfo::default()),
            health_subscribed: false,
            cleared: false,
        }
    }

    fn update_time(&mut self, local_time: NaiveDateTime, offset: FixedOffset, is_24h: bool) {
        set_label(
            &mut self.time,
            format_args!("{}", LocalTime { time: local_time, is_24h }),
        );
        set_label(
            &mut self.utc,
            format_args!("{}", UtcTime(clock::to_utc(local_time, offset))),
        );
        set_label(
            &mut self.date,
            format_args!("{}", DisplayDate(local_time.date())),
        );
    }

    fn mark_all_dirty(&mut self) {
        self.time.mark_dirty();
        self.utc.mark_dirty();
        self.date.mark_dirty();
        self.steps.mark_dirty();
        self.battery.mark_dirty();
    }
}

/// Write formatted text into a label, keeping the old text if it does not fit
fn set_label(label: &mut Label, args: fmt::Arguments) {
    if let Err(e) = label.set_fmt(args) {
        error!("Label update failed: {:?}", e);
    }
}

enum WindowState {
    Unloaded,
    Loaded(Layers),
}

/// Basic default watchface
pub struct DefaultWatchface {
    config: WatchfaceConfig,
    state: WindowState,
}

impl DefaultWatchface {
    /// Create the (unloaded) watchface window
    pub fn new(config: WatchfaceConfig) -> Self {
        Self {
            config,
            state: WindowState::Unloaded,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, WindowState::Loaded(_))
    }

    /// Current text of a region, `None` while unloaded
    pub fn text(&self, region: TextRegion) -> Option<&str> {
        let WindowState::Loaded(layers) = &self.state else {
            return None;
        };
        let label = match region {
            TextRegion::Time => &layers.time,
            TextRegion::Utc => &layers.utc,
            TextRegion::Date => &layers.date,
            TextRegion::Steps => &layers.steps,
        };
        Some(label.text())
    }

    /// Charge state shown by the gauge, `None` while unloaded
    pub fn battery(&self) -> Option<BatteryInfo> {
        match &self.state {
            WindowState::Loaded(layers) => Some(layers.battery.info()),
            WindowState::Unloaded => None,
        }
    }

    /// Whether any region waits for a repaint
    pub fn needs_render(&self) -> bool {
        match &self.state {
            WindowState::Loaded(layers) => {
                !layers.cleared
                    || layers.time.is_dirty()
                    || layers.utc.is_dirty()
                    || layers.date.is_dirty()
                    || layers.steps.is_dirty()
                    || layers.battery.is_dirty()
            }
            WindowState::Unloaded => false,
        }
    }
}

impl WatchFace for DefaultWatchface {
    fn load<H: Host>(&mut self, host: &mut H, bounds: Size) {
        if self.is_loaded() {
            warn!("Watchface already loaded");
            return;
        }

        let layout = Layout::new(bounds, self.config.gauge_margin, self.config.gauge_height);
        let mut layers = Layers::new(&layout, &self.config);

        // Fill in time and battery right away, the first tick is up to a second out
        layers.update_time(host.local_time(), host.utc_offset(), host.clock_is_24h_style());
        if let Err(e) = host.subscribe(EventSource::SecondTick) {
            error!("Tick subscription failed: {:?}", e);
        }

        layers.battery.set_info(host.battery_peek());
        if let Err(e) = host.subscribe(EventSource::BatteryState) {
            error!("Battery subscription failed: {:?}", e);
        }

        if host.health().is_some() {
            match host.subscribe(EventSource::Health) {
                Ok(()) => layers.health_subscribed = true,
                Err(_) => error!("Health not available!"),
            }
        }

        self.state = WindowState::Loaded(layers);
        info!("Watchface loaded");
    }

    fn unload<H: Host>(&mut self, host: &mut H) {
        let WindowState::Loaded(layers) = mem::replace(&mut self.state, WindowState::Unloaded)
        else {
            warn!("Watchface not loaded");
            return;
        };

        host.unsubscribe(EventSource::SecondTick);
        host.unsubscribe(EventSource::BatteryState);
        if layers.health_subscribed {
            host.unsubscribe(EventSource::Health);
        }
        info!("Watchface unloaded");
    }

    fn on_tick<H: Host>(&mut self, host: &H, local_time: NaiveDateTime) {
        let WindowState::Loaded(layers) = &mut self.state else {
            trace!("Tick while unloaded");
            return;
        };
        layers.update_time(local_time, host.utc_offset(), host.clock_is_24h_style());
    }

    fn on_battery_change(&mut self, info: BatteryInfo) {
        let WindowState::Loaded(layers) = &mut self.state else {
            trace!("Battery change while unloaded");
            return;
        };
        debug!(
            "Battery status: {} ({})",
            info.percent,
            if info.charging { "charging" } else { "discharging" }
        );
        layers.battery.set_info(info);
    }

    fn on_health_event<H: Host>(&mut self, host: &H, event: HealthEvent) {
        let WindowState::Loaded(layers) = &mut self.state else {
            trace!("Health event while unloaded");
            return;
        };
        if !layers.health_subscribed {
            return;
        }

        match event {
            HealthEvent::SignificantUpdate | HealthEvent::MovementUpdate => {
                let Some(health) = host.health() else {
                    return;
                };
                match steps::read_steps(health, host.local_time()) {
                    Some(count) => set_label(&mut layers.steps, format_args!("{}", count)),
                    // Keep the last known count on screen
                    None => error!("Data unavailable!"),
                }
            }
            HealthEvent::SleepUpdate => info!("New health sleep update event"),
        }
    }

    fn render<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let background = self.config.background;
        let WindowState::Loaded(layers) = &mut self.state else {
            return Ok(());
        };

        if !layers.cleared {
            target.clear(background)?;
            layers.mark_all_dirty();
            layers.cleared = true;
        }

        for label in [
            &mut layers.time,
            &mut layers.utc,
            &mut layers.date,
            &mut layers.steps,
        ] {
            if label.is_dirty() {
                label.draw(target)?;
            }
        }
        if layers.battery.is_dirty() {
            layers.battery.draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use embedded_graphics::{prelude::*, primitives::Rectangle};

    use crate::system::host::Accessibility;
    use crate::system::mock::{datetime, FakeHost, FrameBuffer};
    use crate::ui::colors::{DUKE_BLUE, WHITE};

    const BOUNDS: Size = Size::new(240, 240);

    fn loaded(host: &mut FakeHost) -> DefaultWatchface {
        let mut face = DefaultWatchface::new(WatchfaceConfig::default());
        face.load(host, BOUNDS);
        face
    }

    #[test]
    fn test_new_is_unloaded() {
        let face = DefaultWatchface::new(WatchfaceConfig::default());
        assert!(!face.is_loaded());
        assert_eq!(face.text(TextRegion::Time), None);
        assert_eq!(face.battery(), None);
        assert!(!face.needs_render());
    }

    #[test]
    fn test_load_formats_immediately() {
        let mut host = FakeHost::new(datetime(14, 5, 0));
        host.offset = FixedOffset::west_opt(5 * 3_600).unwrap();
        host.battery = BatteryInfo { percent: 77, charging: true };
        let face = loaded(&mut host);

        assert!(face.is_loaded());
        assert_eq!(face.text(TextRegion::Time), Some("14:05"));
        assert_eq!(face.text(TextRegion::Utc), Some("19:05 UTC"));
        assert_eq!(face.text(TextRegion::Date), Some("Sun 03 Mar"));
        assert_eq!(face.text(TextRegion::Steps), Some(""));
        assert_eq!(face.battery(), Some(BatteryInfo { percent: 77, charging: true }));
        assert!(host.is_subscribed(EventSource::SecondTick));
        assert!(host.is_subscribed(EventSource::BatteryState));
        assert!(!host.is_subscribed(EventSource::Health));
    }

    #[test]
    fn test_load_twice_is_noop() {
        let mut host = FakeHost::new(datetime(14, 5, 0));
        let mut face = loaded(&mut host);
        face.load(&mut host, BOUNDS);
        assert_eq!(host.subscriptions.len(), 2);
    }

    #[test]
    fn test_tick_12h() {
        let mut host = FakeHost::new(datetime(9, 0, 0));
        host.is_24h = false;
        let mut face = loaded(&mut host);
        face.on_tick(&host, datetime(23, 59, 59));
        assert_eq!(face.text(TextRegion::Time), Some("11:59"));
        assert_eq!(face.text(TextRegion::Utc), Some("23:59 UTC"));
    }

    #[test]
    fn test_battery_change() {
        let mut host = FakeHost::new(datetime(9, 0, 0));
        let mut face = loaded(&mut host);
        assert_eq!(face.battery(), Some(BatteryInfo::default()));
        face.on_battery_change(BatteryInfo { percent: 42, charging: false });
        assert_eq!(face.battery(), Some(BatteryInfo { percent: 42, charging: false }));
    }

    #[test]
    fn test_health_subscription_fails() {
        let mut host =
            FakeHost::new(datetime(9, 0, 0)).with_health(Accessibility::Available, 500);
        host.health_subscribe_fails = true;
        let mut face = loaded(&mut host);

        assert!(face.is_loaded());
        assert!(!host.is_subscribed(EventSource::Health));
        face.on_health_event(&host, HealthEvent::MovementUpdate);
        assert_eq!(face.text(TextRegion::Steps), Some(""));
    }

    #[test]
    fn test_step_updates() {
        let mut host =
            FakeHost::new(datetime(9, 0, 0)).with_health(Accessibility::Available, 4321);
        let mut face = loaded(&mut host);
        assert!(host.is_subscribed(EventSource::Health));

        face.on_health_event(&host, HealthEvent::MovementUpdate);
        assert_eq!(face.text(TextRegion::Steps), Some("4321 steps"));

        host.health.as_mut().unwrap().steps = 5000;
        face.on_health_event(&host, HealthEvent::SignificantUpdate);
        assert_eq!(face.text(TextRegion::Steps), Some("5000 steps"));

        host.health.as_mut().unwrap().steps = 6000;
        face.on_health_event(&host, HealthEvent::SleepUpdate);
        assert_eq!(face.text(TextRegion::Steps), Some("5000 steps"));
    }

    #[test]
    fn test_unavailable_steps_keep_last_value() {
        let mut host =
            FakeHost::new(datetime(9, 0, 0)).with_health(Accessibility::Available, 4321);
        let mut face = loaded(&mut host);
        face.on_health_event(&host, HealthEvent::MovementUpdate);

        let health = host.health.as_mut().unwrap();
        health.accessibility = Accessibility::NotAvailable;
        health.steps = 9999;
        face.on_health_event(&host, HealthEvent::MovementUpdate);
        assert_eq!(face.text(TextRegion::Steps), Some("4321 steps"));
    }

    #[test]
    fn test_unload() {
        let mut host =
            FakeHost::new(datetime(9, 0, 0)).with_health(Accessibility::Available, 1);
        let mut face = loaded(&mut host);
        assert_eq!(host.subscriptions.len(), 3);

        face.unload(&mut host);
        assert!(!face.is_loaded());
        assert!(host.subscriptions.is_empty());

        // Events after teardown are dropped
        face.on_tick(&host, datetime(10, 0, 0));
        face.on_battery_change(BatteryInfo { percent: 1, charging: true });
        face.on_health_event(&host, HealthEvent::MovementUpdate);
        assert_eq!(face.text(TextRegion::Time), None);
        assert_eq!(face.battery(), None);

        // A second unload does nothing
        face.unload(&mut host);
        assert!(host.subscriptions.is_empty());
    }

    #[test]
    fn test_reload_after_unload() {
        let mut host = FakeHost::new(datetime(9, 0, 0));
        let mut face = loaded(&mut host);
        face.unload(&mut host);
        host.now = datetime(10, 30, 0);
        face.load(&mut host, BOUNDS);
        assert_eq!(face.text(TextRegion::Time), Some("10:30"));
        assert_eq!(host.subscriptions.len(), 2);
    }

    #[test]
    fn test_render_clears_then_repaints_dirty_regions() {
        let mut host = FakeHost::new(datetime(14, 5, 0));
        let mut face = loaded(&mut host);
        let mut display = FrameBuffer::new(BOUNDS);

        assert!(face.needs_render());
        face.render(&mut display).unwrap();
        assert!(!face.needs_render());
        assert_eq!(display.pixel(Point::new(0, 0)), WHITE);
        assert!(display.written.len() >= (BOUNDS.width * BOUNDS.height) as usize);

        // Same minute: nothing changes on screen
        display.reset_written();
        face.on_tick(&host, datetime(14, 5, 30));
        face.render(&mut display).unwrap();
        assert!(display.written.is_empty());

        // Battery change repaints only the gauge
        face.on_battery_change(BatteryInfo { percent: 50, charging: false });
        assert!(face.needs_render());
        face.render(&mut display).unwrap();
        let gauge = Layout::new(BOUNDS, 20, 4).gauge;
        assert!(!display.written.is_empty());
        assert!(display.written.iter().all(|p| gauge.contains(*p)));
        assert_eq!(display.pixel(gauge.top_left), DUKE_BLUE);

        // New minute repaints the time rows
        display.reset_written();
        face.on_tick(&host, datetime(14, 6, 0));
        face.render(&mut display).unwrap();
        let layout = Layout::new(BOUNDS, 20, 4);
        let rows = Rectangle::with_corners(
            layout.time.top_left,
            layout.utc.bottom_right().unwrap(),
        );
        assert!(!display.written.is_empty());
        assert!(display.written.iter().all(|p| rows.contains(*p)));
    }

    #[test]
    fn test_render_unloaded_draws_nothing() {
        let mut face = DefaultWatchface::new(WatchfaceConfig::default());
        let mut display = FrameBuffer::new(BOUNDS);
        face.render(&mut display).unwrap();
        assert!(display.written.is_empty());
    }
}
