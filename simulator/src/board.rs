//! Desktop stand-ins for the board peripherals.
//!
//! Each type implements the same trait the firmware's embassy-rp peripheral
//! does, so the library's controller runs unchanged against the keyboard and
//! the simulator window.

use std::convert::Infallible;
use std::time::Instant;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{ErrorKind as PwmErrorKind, ErrorType as PwmErrorType, SetDutyCycle};
use joystick_oled::config::{MAX_SAMPLE, PWM_WRAP, SAMPLE_CENTER, SCREEN_HEIGHT, SCREEN_WIDTH};
use joystick_oled::display::{HEIGHT, WIDTH};
use joystick_oled::{AdcChannel, AnalogInput, Clock, FrameSink, Framebuffer};

use crate::timing::JOYSTICK_STEP;

/// Height of the status strip drawn below the OLED area.
pub const STATUS_HEIGHT: u32 = 16;

// ===== Joystick =====

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Arrow-key joystick. Held keys push an axis towards its end stop; released
/// axes spring back to center.
pub struct VirtualJoystick {
    x: u16,
    y: u16,
    held: [bool; 4],
    selected: AdcChannel,
}

impl VirtualJoystick {
    pub const fn new() -> Self {
        Self {
            x: SAMPLE_CENTER,
            y: SAMPLE_CENTER,
            held: [false; 4],
            selected: AdcChannel::X,
        }
    }

    pub fn set_held(
        &mut self,
        direction: Direction,
        held: bool,
    ) {
        self.held[direction as usize] = held;
    }

    /// Move both axes one step towards their targets. Called once per cycle.
    pub fn step(&mut self) {
        let target_x = self.target(Direction::Left, Direction::Right);
        let target_y = self.target(Direction::Up, Direction::Down);
        self.x = approach(self.x, target_x);
        self.y = approach(self.y, target_y);
    }

    fn target(
        &self,
        low: Direction,
        high: Direction,
    ) -> u16 {
        match (self.held[low as usize], self.held[high as usize]) {
            (true, false) => 0,
            (false, true) => MAX_SAMPLE,
            _ => SAMPLE_CENTER,
        }
    }
}

fn approach(
    current: u16,
    target: u16,
) -> u16 {
    if current < target {
        current.saturating_add(JOYSTICK_STEP).min(target)
    } else {
        current.saturating_sub(JOYSTICK_STEP).max(target)
    }
}

impl AnalogInput for VirtualJoystick {
    fn select_channel(
        &mut self,
        channel: AdcChannel,
    ) {
        self.selected = channel;
    }

    fn read(&mut self) -> u16 {
        match self.selected {
            AdcChannel::X => self.x,
            AdcChannel::Y => self.y,
        }
    }
}

// ===== Buttons / LEDs =====

/// Key-driven push button (reads low while the key is held).
#[derive(Default)]
pub struct KeyButton {
    pub pressed: bool,
}

impl DigitalErrorType for KeyButton {
    type Error = Infallible;
}

impl InputPin for KeyButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(!self.pressed) }

    fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(self.pressed) }
}

#[derive(Default)]
pub struct SimLed {
    pub on: bool,
}

impl DigitalErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.on = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on = true;
        Ok(())
    }
}

/// PWM channel with the firmware's wrap; rejects levels above it like the
/// RP2350 slice does.
#[derive(Default)]
pub struct SimPwm {
    pub duty: u16,
}

impl PwmErrorType for SimPwm {
    type Error = PwmErrorKind;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 { PWM_WRAP }

    fn set_duty_cycle(
        &mut self,
        duty: u16,
    ) -> Result<(), Self::Error> {
        if duty > PWM_WRAP {
            return Err(PwmErrorKind::Other);
        }
        self.duty = duty;
        Ok(())
    }
}

// ===== Display / Clock =====

/// Copies every transmitted frame into the top of the simulator display.
pub struct WindowSink {
    pub display: SimulatorDisplay<BinaryColor>,
}

impl WindowSink {
    pub fn new() -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT + STATUS_HEIGHT)),
        }
    }
}

impl FrameSink for WindowSink {
    type Error = Infallible;

    fn transmit(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), Self::Error> {
        let pixels = (0..HEIGHT as i32)
            .flat_map(|y| (0..WIDTH as i32).map(move |x| Pixel(Point::new(x, y), frame.pixel(x, y))));
        self.display.draw_iter(pixels)
    }
}

pub struct SystemClock {
    boot: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { boot: Instant::now() } }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 { self.boot.elapsed().as_millis() as u64 }
}
