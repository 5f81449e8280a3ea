//! Text regions
//!
//! A label owns a fixed buffer for its text, so updating it never allocates.
//! Setting new text only marks the label dirty; pixels change on the next
//! [`Label::draw`].

use core::fmt;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

/// Maximum text length of a label in bytes
pub const BUF_LEN: usize = 24;

/// Font, colors and alignment of a label
#[derive(Clone, Copy)]
pub struct LabelStyle {
    pub font: &'static MonoFont<'static>,
    pub text_color: Rgb565,
    pub background_color: Rgb565,
    pub alignment: Alignment,
}

pub struct Label {
    str_buf: [u8; BUF_LEN],
    len: usize,
    bounds: Rectangle,
    style: LabelStyle,
    dirty: bool,
}

impl Label {
    /// Create new, empty label covering `bounds`
    pub fn new(bounds: Rectangle, style: LabelStyle) -> Self {
        Self {
            str_buf: [0; BUF_LEN],
            len: 0,
            bounds,
            style,
            dirty: true,
        }
    }

    /// Current text
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }

    /// Replace the text, marking the label dirty if it changed
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        if text.len() > BUF_LEN {
            return Err(Error::TextOverflow);
        }
        if text != self.text() {
            self.str_buf[..text.len()].copy_from_slice(text.as_bytes());
            self.len = text.len();
            self.dirty = true;
        }
        Ok(())
    }

    /// Replace the text with formatted output
    ///
    /// On overflow the previous text is kept.
    pub fn set_fmt(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        let mut buf = [0u8; BUF_LEN];
        let text = format_no_std::show(&mut buf, args).map_err(|_| Error::TextOverflow)?;
        self.set_text(text)
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the region and draw the text, vertically centered
    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.style.background_color))
            .draw(target)?;

        let center = self.bounds.center();
        let x = match self.style.alignment {
            Alignment::Left => self.bounds.top_left.x,
            Alignment::Center => center.x,
            Alignment::Right => self
                .bounds
                .bottom_right()
                .map_or(self.bounds.top_left.x, |corner| corner.x),
        };
        let character_style = MonoTextStyle::new(self.style.font, self.style.text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.style.alignment)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(self.text(), Point::new(x, center.y), character_style, text_style)
            .draw(target)?;

        self.dirty = false;
        Ok(())
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Text does not fit into the label buffer
    TextOverflow,
}
