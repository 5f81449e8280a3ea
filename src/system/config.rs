//! Watchface configuration

use chrono::{FixedOffset, Offset, Utc};
use embedded_graphics::pixelcolor::Rgb565;

use crate::ui::colors;

/// Clock preferences of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSettings {
    /// Offset of local time from UTC
    pub utc_offset: FixedOffset,
    /// 24 hour (`14:05`) or 12 hour (`02:05`) clock
    pub is_24h: bool,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
            is_24h: true,
        }
    }
}

impl ClockSettings {
    /// Create clock settings from an offset in seconds east of UTC
    pub fn from_offset_secs(offset_secs: i32, is_24h: bool) -> Result<Self, Error> {
        let utc_offset = FixedOffset::east_opt(offset_secs).ok_or(Error::InvalidUtcOffset)?;
        Ok(Self { utc_offset, is_24h })
    }
}

/// Appearance of the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchfaceConfig {
    /// Window background, also used behind every text region
    pub background: Rgb565,
    /// Color of all text regions
    pub text_color: Rgb565,
    /// Horizontal inset of the battery gauge on both sides
    pub gauge_margin: u32,
    /// Height of the battery gauge
    pub gauge_height: u32,
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self {
            background: colors::WHITE,
            text_color: colors::BLACK,
            gauge_margin: 20,
            gauge_height: 4,
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// UTC offset is not strictly within ±24 hours
    InvalidUtcOffset,
}
