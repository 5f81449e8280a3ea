//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};
use pinetime_watchface::BatteryInfo;

pub struct BatteryStatus<'a> {
    /// Pin P0.12: High = battery, Low = charging
    pin_charge_indication: Input<'a, P0_12>,

    /// Saadc instance, single channel on P0.31
    saadc: Saadc<'a, 1>,

    /// Last charge state
    info: BatteryInfo,
}

impl<'a> BatteryStatus<'a> {
    /// Initialize battery status with a first measurement
    pub async fn init(pin_charge_indication: Input<'a, P0_12>, saadc: Saadc<'a, 1>) -> Self {
        let mut status = Self {
            pin_charge_indication,
            saadc,
            info: BatteryInfo::default(),
        };
        status.update().await;
        status
    }

    /// Return the current state of the battery.
    ///
    /// This returns the stored value. To fetch current data, call `update()` first.
    pub fn info(&self) -> BatteryInfo {
        self.info
    }

    /// Update the current battery status by reading information from the
    /// hardware. Return whether or not the values changed.
    pub async fn update(&mut self) -> bool {
        let charging = self.pin_charge_indication.is_low();

        let mut buf = [0; 1];
        self.saadc.sample(&mut buf).await;

        match BatteryInfo::from_measurement(buf[0], charging) {
            Ok(info) if info != self.info => {
                self.info = info;
                true
            }
            Ok(_) => false,
            Err(e) => {
                defmt::warn!("Invalid battery measurement {}: {}", buf[0], e);
                false
            }
        }
    }
}
