//! Color palette (RGB565)
//!
//! Gauge tints are converted from their 24 bit values: 5 bits red,
//! 6 bits green, 5 bits blue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// #AAFFAA
pub const MINT_GREEN: Rgb565 = Rgb565::new(21, 63, 21);
/// #00AA55
pub const JAEGER_GREEN: Rgb565 = Rgb565::new(0, 42, 10);
/// #00AAFF
pub const VIVID_CERULEAN: Rgb565 = Rgb565::new(0, 42, 31);
/// #0000AA
pub const DUKE_BLUE: Rgb565 = Rgb565::new(0, 0, 21);
