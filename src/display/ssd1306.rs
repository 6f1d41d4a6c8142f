//! SSD1306 128x64 OLED transport over blocking I2C.
//!
//! Only the two operations the main loop needs are implemented: the power-on
//! configuration sequence and a full-frame upload. Drawing happens in a
//! [`Framebuffer`] and the whole buffer is sent every frame.
//!
//! Every I2C write starts with a control byte: `0x00` for a command stream,
//! `0x40` for display RAM data.

use embedded_hal::i2c::I2c;

use super::{FrameSink, Framebuffer, HEIGHT, PAGES, WIDTH};

// Control bytes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

// SSD1306 Commands
const SET_MEM_ADDR: u8 = 0x20;
const SET_COL_ADDR: u8 = 0x21;
const SET_PAGE_ADDR: u8 = 0x22;
const SET_DISP_START_LINE: u8 = 0x40;
const SET_CONTRAST: u8 = 0x81;
const SET_CHARGE_PUMP: u8 = 0x8D;
const SET_SEG_REMAP: u8 = 0xA0;
const SET_ENTIRE_ON: u8 = 0xA4;
const SET_NORM_INV: u8 = 0xA6;
const SET_MUX_RATIO: u8 = 0xA8;
const SET_DISP: u8 = 0xAE;
const SET_COM_OUT_DIR: u8 = 0xC0;
const SET_DISP_OFFSET: u8 = 0xD3;
const SET_DISP_CLK_DIV: u8 = 0xD5;
const SET_PRECHARGE: u8 = 0xD9;
const SET_COM_PIN_CFG: u8 = 0xDA;
const SET_VCOM_DESEL: u8 = 0xDB;

/// Horizontal addressing: column pointer wraps into the next page.
const ADDR_MODE_HORIZONTAL: u8 = 0x00;

/// Power-on configuration, one command (with its arguments) per entry.
const INIT_SEQUENCE: &[&[u8]] = &[
    &[SET_DISP],                              // display off
    &[SET_MEM_ADDR, ADDR_MODE_HORIZONTAL],    // matches framebuffer layout
    &[SET_DISP_START_LINE],                   // start line 0
    &[SET_SEG_REMAP | 0x01],                  // column 127 mapped to SEG0
    &[SET_MUX_RATIO, HEIGHT as u8 - 1],       // 64 rows
    &[SET_COM_OUT_DIR | 0x08],                // scan from COM[N-1] to COM0
    &[SET_DISP_OFFSET, 0x00],
    &[SET_COM_PIN_CFG, 0x12],                 // alternative COM pins, 128x64
    &[SET_DISP_CLK_DIV, 0x80],
    &[SET_PRECHARGE, 0xF1],                   // internal charge pump timing
    &[SET_VCOM_DESEL, 0x30],                  // 0.83 x Vcc
    &[SET_CONTRAST, 0xFF],
    &[SET_ENTIRE_ON],                         // follow RAM contents
    &[SET_NORM_INV],                          // not inverted
    &[SET_CHARGE_PUMP, 0x14],                 // enable charge pump
    &[SET_DISP | 0x01],                       // display on
];

/// Bytes of display RAM sent per I2C write (plus one control byte).
const DATA_CHUNK: usize = 32;

/// SSD1306 display on an I2C bus. Owns the bus.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a transport for the controller at `address` (7-bit).
    pub const fn new(
        i2c: I2C,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Send the power-on configuration sequence. The panel is left on,
    /// showing whatever the RAM holds; follow with a frame upload.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for command in INIT_SEQUENCE {
            self.write_command(command)?;
        }
        Ok(())
    }

    /// Upload a full frame of display RAM.
    ///
    /// Resets the column and page windows to the whole panel first, so the
    /// upload always starts at the top-left.
    pub fn flush_buffer(
        &mut self,
        buffer: &[u8],
    ) -> Result<(), I2C::Error> {
        self.write_command(&[SET_COL_ADDR, 0, WIDTH as u8 - 1])?;
        self.write_command(&[SET_PAGE_ADDR, 0, PAGES as u8 - 1])?;

        let mut packet = [0u8; DATA_CHUNK + 1];
        packet[0] = CONTROL_DATA;
        for chunk in buffer.chunks(DATA_CHUNK) {
            packet[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &packet[..=chunk.len()])?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn release(self) -> I2C { self.i2c }

    /// Send one command: opcode plus up to two argument bytes.
    fn write_command(
        &mut self,
        command: &[u8],
    ) -> Result<(), I2C::Error> {
        let mut packet = [CONTROL_COMMAND; 4];
        let len = command.len().min(3);
        packet[1..=len].copy_from_slice(&command[..len]);
        self.i2c.write(self.address, &packet[..=len])
    }
}

impl<I2C: I2c> FrameSink for Ssd1306<I2C> {
    type Error = I2C::Error;

    fn transmit(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), Self::Error> {
        self.flush_buffer(frame.as_bytes())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation, SevenBitAddress};

    use super::*;
    use crate::display::BUFFER_SIZE;

    /// I2C bus that records every write and can fail after N writes.
    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail_after: Option<usize>,
    }

    impl ErrorType for RecordingBus {
        type Error = ErrorKind;
    }

    impl I2c<SevenBitAddress> for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let Operation::Write(bytes) = op {
                    if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
                        return Err(ErrorKind::Other);
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    fn data_payload(writes: &[(u8, Vec<u8>)]) -> Vec<u8> {
        writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == CONTROL_DATA)
            .flat_map(|(_, bytes)| bytes[1..].iter().copied())
            .collect()
    }

    #[test]
    fn test_init_sends_command_sequence() {
        let mut display = Ssd1306::new(RecordingBus::default(), 0x3C);
        display.init().unwrap();
        let bus = display.release();

        assert_eq!(bus.writes.len(), INIT_SEQUENCE.len());
        assert!(bus.writes.iter().all(|(addr, bytes)| *addr == 0x3C && bytes[0] == CONTROL_COMMAND));
        assert_eq!(bus.writes.first().unwrap().1, [CONTROL_COMMAND, 0xAE]);
        assert_eq!(bus.writes.last().unwrap().1, [CONTROL_COMMAND, 0xAF]);
        assert!(bus.writes.contains(&(0x3C, vec![CONTROL_COMMAND, SET_MUX_RATIO, 63])));
        assert!(bus.writes.contains(&(0x3C, vec![CONTROL_COMMAND, SET_CHARGE_PUMP, 0x14])));
    }

    #[test]
    fn test_flush_sets_window_then_streams_data() {
        let mut display = Ssd1306::new(RecordingBus::default(), 0x3C);
        let buffer: Vec<u8> = (0..BUFFER_SIZE).map(|i| i as u8).collect();
        display.flush_buffer(&buffer).unwrap();
        let bus = display.release();

        assert_eq!(bus.writes[0].1, [CONTROL_COMMAND, SET_COL_ADDR, 0, 127]);
        assert_eq!(bus.writes[1].1, [CONTROL_COMMAND, SET_PAGE_ADDR, 0, 7]);
        assert_eq!(bus.writes.len(), 2 + BUFFER_SIZE / DATA_CHUNK);
        assert_eq!(data_payload(&bus.writes), buffer);
    }

    #[test]
    fn test_transmit_sends_framebuffer_bytes() {
        let mut frame = Framebuffer::new();
        frame.clear_buffer(embedded_graphics::pixelcolor::BinaryColor::On);
        let mut display = Ssd1306::new(RecordingBus::default(), 0x3D);
        display.transmit(&frame).unwrap();
        let bus = display.release();

        assert!(bus.writes.iter().all(|(addr, _)| *addr == 0x3D));
        let payload = data_payload(&bus.writes);
        assert_eq!(payload.len(), BUFFER_SIZE);
        assert!(payload.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_bus_error_propagates() {
        let bus = RecordingBus {
            fail_after: Some(3),
            ..Default::default()
        };
        let mut display = Ssd1306::new(bus, 0x3C);
        assert_eq!(display.transmit(&Framebuffer::new()), Err(ErrorKind::Other));
        // Stopped at the first failure
        assert_eq!(display.release().writes.len(), 3);
    }
}
