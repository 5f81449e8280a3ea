//! Display control module for PineTime

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26, SPI2},
    spim::Spim,
};
use embassy_time::Delay;

use display_interface_spi::SPIInterface;
use embedded_graphics::geometry::Size;
use mipidsi::{models::ST7789, Builder, Orientation};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

/// Size of the panel in pixels
pub const SIZE: Size = Size::new(LCD_W as u32, LCD_H as u32);

pub type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, P0_18>, Output<'static, P0_25>>,
    ST7789,
    Output<'static, P0_26>,
>;

/// Initialize the ST7789 panel
pub fn init(
    spim: Spim<'static, SPI2>,
    cs: Output<'static, P0_25>,
    dc: Output<'static, P0_18>,
    rst: Output<'static, P0_26>,
) -> Lcd {
    match Builder::st7789(SPIInterface::new(spim, dc, cs))
        .with_display_size(LCD_W, LCD_H)
        .with_orientation(Orientation::Portrait(false))
        .init(&mut Delay, Some(rst))
    {
        Ok(lcd) => lcd,
        Err(_) => defmt::panic!("Display initialization failed"),
    }
}
