//! Board wiring and peripheral constants.
//!
//! Pin mapping (BitDogLab layout):
//! - Joystick X: GPIO26 (ADC0)
//! - Joystick Y: GPIO27 (ADC1)
//! - Joystick button: GPIO22 (active-low, internal pull-up)
//! - Auxiliary button "A": GPIO5 (active-low, internal pull-up)
//! - Green LED: GPIO11 (digital)
//! - Blue LED: GPIO12 (PWM slice 6, channel A)
//! - Red LED: GPIO13 (PWM slice 6, channel B)
//! - SSD1306 display: I2C1, SDA GPIO14, SCL GPIO15
//!
//! The GPIO numbers below are informational (boot log); the binary claims the
//! matching typed embassy-rp peripherals.

// =============================================================================
// Pins
// =============================================================================

pub const JOYSTICK_X_PIN: u8 = 26;
pub const JOYSTICK_Y_PIN: u8 = 27;
pub const JOYSTICK_BUTTON_PIN: u8 = 22;
pub const AUX_BUTTON_PIN: u8 = 5;
pub const GREEN_LED_PIN: u8 = 11;
pub const BLUE_LED_PIN: u8 = 12;
pub const RED_LED_PIN: u8 = 13;
pub const DISPLAY_SDA_PIN: u8 = 14;
pub const DISPLAY_SCL_PIN: u8 = 15;

// =============================================================================
// Display Bus
// =============================================================================

/// 7-bit I2C address of the SSD1306 (SA0 tied low).
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I2C fast-mode clock.
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

// =============================================================================
// Analog / PWM
// =============================================================================

/// Largest raw value of the 12-bit ADC.
pub const MAX_SAMPLE: u16 = 4095;

/// Joystick rest position, `MAX_SAMPLE / 2` rounded up.
pub const SAMPLE_CENTER: u16 = 2048;

/// PWM counter wrap (TOP). Duty levels are in `0..=PWM_WRAP`.
pub const PWM_WRAP: u16 = 4095;

// =============================================================================
// Timing
// =============================================================================

/// Minimum time between two accepted activations of the same button.
pub const DEBOUNCE_INTERVAL_MS: u64 = 50;

/// Main loop period. Also the display refresh interval.
pub const LOOP_PERIOD_MS: u32 = 50;
