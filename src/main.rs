//! PineTime watchface firmware
//!
//! A single embassy task owns the watchface and the display and acts as the
//! event loop: once per second it forwards pending battery changes, delivers
//! the tick and repaints whatever became dirty.

#![no_std]
#![no_main]

mod device;

// Panic handler and debugging
use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker, Timer};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use device::{battery::BatteryStatus, display, host::PineTimeHost, uptime};
use pinetime_watchface::{
    system::{
        config::{ClockSettings, WatchfaceConfig},
        host::ClockService,
        time::{TimeManager, TimeReference},
    },
    BatteryInfo, DefaultWatchface, EventSource, WatchFace,
};

// UTC epoch and UTC offset of the build machine, generated by build.rs
include!(concat!(env!("OUT_DIR"), "/utc.rs"));
const CLOCK_24H: bool = true;

// Communication channels
static BATTERY_STATUS: Signal<ThreadModeRawMutex, BatteryInfo> = Signal::new();

/// Fetch the battery status from the hardware.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: BatteryStatus<'static>) {
    loop {
        if battery.update().await {
            // Battery status changed
            defmt::info!("Battery status updated");
            BATTERY_STATUS.signal(battery.info());
        }

        // Re-schedule the timer interrupt in 1s
        Timer::after(Duration::from_secs(1)).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initalize Battery
    let battery = BatteryStatus::init(Input::new(p.P0_12, Pull::None), saadc).await;

    // Backlight pins are active low, lowest level only
    let _backlight = Output::new(p.P0_14, Level::Low, OutputDrive::Standard);

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let mut lcd = display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    );

    // Initialize clock
    let settings = match ClockSettings::from_offset_secs(UTC_OFFSET, CLOCK_24H) {
        Ok(settings) => settings,
        Err(e) => {
            defmt::warn!("Build time UTC offset rejected: {}", e);
            ClockSettings::default()
        }
    };
    let reference = TimeReference::from_epoch(UTC_EPOCH, settings.utc_offset, uptime())
        .unwrap_or_default();
    let mut host = PineTimeHost::new(TimeManager::init(reference), settings, battery.info());

    defmt::info!("Initialization finished");

    // Schedule tasks
    defmt::unwrap!(spawner.spawn(update_battery_status(battery)));

    let mut watchface = DefaultWatchface::new(WatchfaceConfig::default());
    watchface.load(&mut host, display::SIZE);

    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        if BATTERY_STATUS.signaled() {
            let info = BATTERY_STATUS.wait().await;
            host.set_battery(info);
            if host.is_subscribed(EventSource::BatteryState) {
                watchface.on_battery_change(info);
            }
        }

        if host.is_subscribed(EventSource::SecondTick) {
            let now = host.local_time();
            watchface.on_tick(&host, now);
        }

        if watchface.needs_render() && watchface.render(&mut lcd).is_err() {
            defmt::warn!("Display update failed");
        }

        // Re-schedule the timer interrupt in 1s
        tick.next().await;
    }
}
