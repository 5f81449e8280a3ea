//! Battery gauge
//!
//! A bar filled proportionally to the charge. Green tints while charging,
//! blue tints otherwise.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use super::colors::{DUKE_BLUE, JAEGER_GREEN, MINT_GREEN, VIVID_CERULEAN};
use crate::peripherals::battery::BatteryInfo;

/// Background and fill color of the gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugePalette {
    pub background: Rgb565,
    pub fill: Rgb565,
}

pub const CHARGING: GaugePalette = GaugePalette {
    background: MINT_GREEN,
    fill: JAEGER_GREEN,
};

pub const DISCHARGING: GaugePalette = GaugePalette {
    background: VIVID_CERULEAN,
    fill: DUKE_BLUE,
};

impl GaugePalette {
    pub fn for_state(charging: bool) -> Self {
        if charging {
            CHARGING
        } else {
            DISCHARGING
        }
    }
}

/// Width of the filled part: `floor(percent / 100 * width)`, never wider than the gauge
pub fn fill_width(percent: u8, width: u32) -> u32 {
    (u32::from(percent) * width / 100).min(width)
}

pub struct BatteryGauge {
    bounds: Rectangle,
    info: BatteryInfo,
    dirty: bool,
}

impl BatteryGauge {
    pub fn new(bounds: Rectangle, info: BatteryInfo) -> Self {
        Self {
            bounds,
            info,
            dirty: true,
        }
    }

    pub fn info(&self) -> BatteryInfo {
        self.info
    }

    /// Store the new charge state and schedule a repaint
    pub fn set_info(&mut self, info: BatteryInfo) {
        self.info = info;
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn palette(&self) -> GaugePalette {
        GaugePalette::for_state(self.info.charging)
    }

    /// The filled part, anchored at the left edge of the gauge
    pub fn fill_area(&self) -> Rectangle {
        Rectangle::new(
            self.bounds.top_left,
            Size::new(
                fill_width(self.info.percent, self.bounds.size.width),
                self.bounds.size.height,
            ),
        )
    }

    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = self.palette();
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(palette.background))
            .draw(target)?;
        self.fill_area()
            .into_styled(PrimitiveStyle::with_fill(palette.fill))
            .draw(target)?;

        self.dirty = false;
        Ok(())
    }
}
