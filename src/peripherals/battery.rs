//! Battery status
//!
//! Conversion of raw SAADC samples into a charge state. The sampling itself
//! lives in the firmware binary; everything here is pure.
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

/// Charge percent shown before the first real battery reading.
pub const DEFAULT_PERCENT: u8 = 5;

/// Highest valid sample of the 12 bit SAADC.
const ADC_MAX: i16 = 4095;

/// Battery charge state as delivered by the host
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryInfo {
    /// Battery percentage (0–100)
    pub percent: u8,
    /// Charging state
    pub charging: bool,
}

impl Default for BatteryInfo {
    fn default() -> Self {
        Self {
            percent: DEFAULT_PERCENT,
            charging: false,
        }
    }
}

impl BatteryInfo {
    /// Build the charge state from a raw ADC sample and the charge indication pin level.
    pub fn from_measurement(raw_measurement: i16, charging: bool) -> Result<Self, Error> {
        let voltage = millivolts_from_adc(raw_measurement)?;
        Ok(Self {
            percent: percent_from_millivolts(voltage),
            charging,
        })
    }
}

/// Convert an ADC measurement into a battery voltage in millivolts.
pub fn millivolts_from_adc(raw_measurement: i16) -> Result<u16, Error> {
    match raw_measurement {
        0..=ADC_MAX => {
            // Keep as 32 bit for multiplication
            let adc_val = raw_measurement as u32;
            // Multiply by 2 * 1000 for mV and divide by (2 ^ 12 / 3.3V reference)
            Ok((adc_val * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the battery capacity in percent from its voltage.
///
/// Fixed data points with linear interpolation in between.
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    (match voltage {
        0..=3449 => 0,
        3450..=3699 => (voltage - 3450) / 5,
        3700..=4199 => 50 + (voltage - 3700) / 10,
        _ => 100,
    }) as u8
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidMeasurement,
}
