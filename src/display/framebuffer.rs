//! Off-screen framebuffer for the 128x64 monochrome panel.
//!
//! The byte layout matches SSD1306 horizontal addressing mode, so the buffer is
//! streamed to the controller as-is: 8 pages of 128 columns, each byte a
//! vertical strip of 8 pixels with the LSB on top.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Display dimensions.
pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;
/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// 1 bit per pixel frame, fully owned (1 KiB).
pub struct Framebuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    /// Create a blank (all-off) framebuffer.
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; BUFFER_SIZE],
        }
    }

    /// Set every pixel to `color`.
    pub fn clear_buffer(
        &mut self,
        color: BinaryColor,
    ) {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer.fill(fill);
    }

    /// Raw bytes in controller order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.buffer }

    /// Read back a pixel. Out-of-bounds coordinates read as off.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> BinaryColor {
        match Self::locate(x, y) {
            Some((idx, mask)) => BinaryColor::from(self.buffer[idx] & mask != 0),
            None => BinaryColor::Off,
        }
    }

    /// Number of pixels that are on.
    pub fn count_on(&self) -> u32 { self.buffer.iter().map(|b| b.count_ones()).sum() }

    /// Byte index and bit mask for a pixel, or `None` if off-screen.
    #[inline]
    fn locate(
        x: i32,
        y: i32,
    ) -> Option<(usize, u8)> {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize / 8) * WIDTH + x as usize;
            Some((idx, 1 << (y as u8 % 8)))
        } else {
            None
        }
    }

    /// Set a pixel. Off-screen coordinates are clipped.
    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: BinaryColor,
    ) {
        if let Some((idx, mask)) = Self::locate(x, y) {
            if color.is_on() {
                self.buffer[idx] |= mask;
            } else {
                self.buffer[idx] &= !mask;
            }
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        for y in drawable_area.rows() {
            for x in drawable_area.columns() {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
