//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the library.

use std::time::Duration;

use joystick_oled::config::LOOP_PERIOD_MS;

/// Cycle period, same as the firmware main loop.
pub const CYCLE_TIME: Duration = Duration::from_millis(LOOP_PERIOD_MS as u64);

/// Raw ADC counts the virtual stick travels per cycle while an arrow key is
/// held (or while springing back to center).
pub const JOYSTICK_STEP: u16 = 256;
