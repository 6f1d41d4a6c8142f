//! Display output.
//!
//! - `framebuffer`: 128x64 1-bit off-screen buffer implementing `DrawTarget`
//! - `ssd1306`: SSD1306 transport over a blocking I2C bus
//!
//! The main loop draws into a [`Framebuffer`] and hands it to a [`FrameSink`]
//! once the frame is complete.

mod framebuffer;
mod ssd1306;

pub use framebuffer::{BUFFER_SIZE, Framebuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::Ssd1306;

/// Destination for completed frames.
pub trait FrameSink {
    type Error;

    /// Send the whole frame to the panel.
    fn transmit(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), Self::Error>;
}
