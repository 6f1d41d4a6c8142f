//! Application configuration.
//!
//! - `hardware`: Board wiring, peripheral settings, sample range and timing
//! - `layout`: Display dimensions and pre-computed drawing positions

pub mod hardware;
pub mod layout;

// Re-export at config level for convenience
pub use hardware::{
    AUX_BUTTON_PIN,
    BLUE_LED_PIN,
    DEBOUNCE_INTERVAL_MS,
    DISPLAY_I2C_ADDRESS,
    DISPLAY_I2C_FREQUENCY_HZ,
    DISPLAY_SCL_PIN,
    DISPLAY_SDA_PIN,
    GREEN_LED_PIN,
    JOYSTICK_BUTTON_PIN,
    JOYSTICK_X_PIN,
    JOYSTICK_Y_PIN,
    LOOP_PERIOD_MS,
    MAX_SAMPLE,
    PWM_WRAP,
    RED_LED_PIN,
    SAMPLE_CENTER,
};
pub use layout::{
    BORDER_BOTTOM,
    BORDER_LEFT,
    BORDER_RIGHT,
    BORDER_TOP,
    CURSOR_EXTENT_X,
    CURSOR_EXTENT_Y,
    CURSOR_MARGIN,
    MARKER_SIZE,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    X_LABEL_ORIGIN,
    X_VALUE_ORIGIN,
    Y_LABEL_ORIGIN,
    Y_VALUE_ORIGIN,
};
