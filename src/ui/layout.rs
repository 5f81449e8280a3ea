//! Region placement
//!
//! Rows are given as percentages of the display height so the same face
//! fits the 240x240 PineTime panel and smaller displays:
//!
//! ```text
//! +------------------+
//! |      14:05       |  time   10%..35%
//! |    19:05 UTC     |  utc    38%..51%
//! |    Sun 03 Mar    |  date   53%..66%
//! |  [=====-----]    |  gauge  70%
//! |    4321 steps    |  steps  78%..91%
//! +------------------+
//! ```

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// (top, height) of the text rows in percent of the display height
const TIME_ROW: (u32, u32) = (10, 25);
const UTC_ROW: (u32, u32) = (38, 13);
const DATE_ROW: (u32, u32) = (53, 13);
const STEPS_ROW: (u32, u32) = (78, 13);
/// Top of the gauge in percent of the display height
const GAUGE_TOP: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub time: Rectangle,
    pub utc: Rectangle,
    pub date: Rectangle,
    pub gauge: Rectangle,
    pub steps: Rectangle,
}

impl Layout {
    /// Place all regions inside a display of `bounds`
    pub fn new(bounds: Size, gauge_margin: u32, gauge_height: u32) -> Self {
        let row = |(top, height): (u32, u32)| {
            Rectangle::new(
                Point::new(0, (bounds.height * top / 100) as i32),
                Size::new(bounds.width, bounds.height * height / 100),
            )
        };

        let gauge_width = bounds.width.saturating_sub(2 * gauge_margin);
        let gauge = Rectangle::new(
            Point::new(
                gauge_margin.min(bounds.width / 2) as i32,
                (bounds.height * GAUGE_TOP / 100) as i32,
            ),
            Size::new(gauge_width, gauge_height),
        );

        Self {
            time: row(TIME_ROW),
            utc: row(UTC_ROW),
            date: row(DATE_ROW),
            gauge,
            steps: row(STEPS_ROW),
        }
    }

    /// Regions from top to bottom
    pub fn regions(&self) -> [Rectangle; 5] {
        [self.time, self.utc, self.date, self.gauge, self.steps]
    }
}
