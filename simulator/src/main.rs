//! Joystick / OLED simulator for Windows/Desktop.
//!
//! Runs the firmware's controller against keyboard-driven peripherals and
//! shows the exact frame the firmware would send to the SSD1306, with a
//! status strip for the LEDs underneath.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | Arrow keys | Deflect the joystick (springs back when released) |
//! | `J` | Joystick button: green LED + border style |
//! | `A` | Auxiliary button: PWM LEDs on/off |
//!
//! Key repeat is ignored; a button stays pressed until its key is released.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod board;
mod timing;

use std::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use joystick_oled::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use joystick_oled::{Controller, CycleReport, Peripherals};
use profont::PROFONT_7_POINT;

use crate::board::{
    Direction,
    KeyButton,
    STATUS_HEIGHT,
    SimLed,
    SimPwm,
    SystemClock,
    VirtualJoystick,
    WindowSink,
};
use crate::timing::CYCLE_TIME;

type SimPeripherals = Peripherals<VirtualJoystick, KeyButton, SimLed, SimPwm, WindowSink, SystemClock>;

const STATUS_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_7_POINT, BinaryColor::On);
const STATUS_ORIGIN: Point = Point::new(2, SCREEN_HEIGHT as i32 + 4);

fn main() {
    let output_settings = OutputSettingsBuilder::new()
        .scale(4)
        .theme(BinaryColorTheme::OledBlue)
        .build();
    let mut window = Window::new("Joystick OLED Sim", &output_settings);

    let mut io: SimPeripherals = Peripherals {
        adc: VirtualJoystick::new(),
        joystick_button: KeyButton::default(),
        aux_button: KeyButton::default(),
        green_led: SimLed::default(),
        red_pwm: SimPwm::default(),
        blue_pwm: SimPwm::default(),
        display: WindowSink::new(),
        clock: SystemClock::new(),
    };
    let mut controller = Controller::new();

    controller.start(&mut io);
    window.update(&io.display.display);

    loop {
        let cycle_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    handle_key(&mut io, keycode, true);
                }
                SimulatorEvent::KeyUp { keycode, .. } => handle_key(&mut io, keycode, false),
                _ => {}
            }
        }

        io.adc.step();
        let report = controller.tick(&mut io);

        if report.joystick_activated {
            println!(
                "Joystick button: green LED {}, border {:?}",
                on_off(controller.mode().indicator_on),
                controller.mode().border_style
            );
        }
        if report.aux_activated {
            println!("Aux button: PWM {}", on_off(controller.mode().pwm_enabled));
        }

        draw_status(&mut io.display.display, &report, io.green_led.on);
        window.update(&io.display.display);

        let elapsed = cycle_start.elapsed();
        if elapsed < CYCLE_TIME {
            thread::sleep(CYCLE_TIME - elapsed);
        }
    }
}

fn handle_key(
    io: &mut SimPeripherals,
    keycode: Keycode,
    down: bool,
) {
    match keycode {
        Keycode::Left => io.adc.set_held(Direction::Left, down),
        Keycode::Right => io.adc.set_held(Direction::Right, down),
        Keycode::Up => io.adc.set_held(Direction::Up, down),
        Keycode::Down => io.adc.set_held(Direction::Down, down),
        Keycode::J => io.joystick_button.pressed = down,
        Keycode::A => io.aux_button.pressed = down,
        _ => {}
    }
}

/// LED levels below the OLED area: red and blue duty, green on/off.
fn draw_status(
    display: &mut SimulatorDisplay<BinaryColor>,
    report: &CycleReport,
    green_on: bool,
) {
    Rectangle::new(Point::new(0, SCREEN_HEIGHT as i32), Size::new(SCREEN_WIDTH, STATUS_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(display)
        .ok();

    let mut status: heapless::String<32> = heapless::String::new();
    let _ = write!(status, "R{:4} B{:4} G:{}", report.duty.x, report.duty.y, on_off(green_on));
    Text::with_baseline(&status, STATUS_ORIGIN, STATUS_STYLE, Baseline::Top)
        .draw(display)
        .ok();
}

const fn on_off(on: bool) -> &'static str { if on { "ON" } else { "OFF" } }
