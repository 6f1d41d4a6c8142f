//! Joystick firmware library - testable modules for the joystick/OLED board.
//!
//! This library contains the core control loop logic that can be tested on the
//! host machine. The binary (`main.rs`) uses this library and adds the
//! embassy-rp board bring-up.
//!
//! # Per-cycle data flow
//!
//! ```text
//! sampler ──► mapping ──► PWM duty / cursor position
//! debounce ──► mode ──► green LED / border style / PWM enable
//! mode + mapping ──► render ──► SSD1306 over I2C
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux
//! cargo test --lib --target aarch64-apple-darwin      # macOS
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Must come first so the macros are visible to every module below
#[macro_use]
mod logging;

pub mod config;
pub mod controller;
pub mod debounce;
pub mod display;
pub mod mapping;
pub mod mode;
pub mod render;
pub mod sampler;
pub mod styles;

pub use controller::{Clock, Controller, CycleReport, Peripherals, run_forever};
pub use display::{FrameSink, Framebuffer, Ssd1306};
pub use mapping::{CursorPosition, IntensityPair, map_intensity, map_position};
pub use mode::{BorderStyle, ModeState};
pub use sampler::{AdcChannel, AnalogInput, AxisSample};
