//! Joystick sample transforms.
//!
//! - [`map_position`]: raw sample -> marker position on the display
//! - [`map_intensity`]: raw sample -> PWM duty level (deflection from centre)
//!
//! Both are integer-only with truncating division.

use crate::config::{CURSOR_EXTENT_X, CURSOR_EXTENT_Y, CURSOR_MARGIN, MAX_SAMPLE, SAMPLE_CENTER};
use crate::sampler::AxisSample;

/// Top-left corner of the joystick marker, in display pixels.
///
/// For samples in range: `x` in `8..=120`, `y` in `8..=56`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

/// PWM duty levels for the red (X) and blue (Y) LEDs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct IntensityPair {
    pub x: u16,
    pub y: u16,
}

impl IntensityPair {
    /// Both channels dark.
    pub const OFF: Self = Self { x: 0, y: 0 };
}

/// Scale one axis: `sample * extent / MAX_SAMPLE + margin`.
#[inline]
const fn scale_axis(
    sample: u16,
    extent: u32,
) -> i32 {
    (sample as u32 * extent / MAX_SAMPLE as u32) as i32 + CURSOR_MARGIN
}

/// Deflection from the rest position, doubled: `|CENTER - sample| * 2`.
#[inline]
const fn deflection(sample: u16) -> u16 { (SAMPLE_CENTER.abs_diff(sample) as u32 * 2) as u16 }

/// Map a joystick sample to the marker position.
pub const fn map_position(sample: AxisSample) -> CursorPosition {
    CursorPosition {
        x: scale_axis(sample.x, CURSOR_EXTENT_X),
        y: scale_axis(sample.y, CURSOR_EXTENT_Y),
    }
}

/// Map a joystick sample to LED duty levels.
pub const fn map_intensity(sample: AxisSample) -> IntensityPair {
    IntensityPair {
        x: deflection(sample.x),
        y: deflection(sample.y),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
