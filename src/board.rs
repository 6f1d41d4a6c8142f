//! embassy-rp adapters for the services the library consumes as traits.
//!
//! Digital pins, PWM outputs and the I2C bus already implement the
//! `embedded-hal` traits; only the ADC and the millisecond clock need glue.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::i2c::Config as I2cConfig;
use embassy_rp::pwm::Config as PwmConfig;
use embassy_time::Instant;
use joystick_oled::config::{DISPLAY_I2C_FREQUENCY_HZ, PWM_WRAP};
use joystick_oled::sampler::LastGoodReadings;
use joystick_oled::{AdcChannel, AnalogInput, Clock};

/// Blocking ADC with the two joystick channels attached.
///
/// A failed conversion is logged and answered with the last good reading of
/// that channel, so one glitch never reaches the display or the LEDs.
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; 2],
    readings: LastGoodReadings,
    selected: AdcChannel,
}

impl<'d> JoystickAdc<'d> {
    pub fn new(
        adc: Adc<'d, Blocking>,
        x: Channel<'d>,
        y: Channel<'d>,
    ) -> Self {
        Self {
            adc,
            channels: [x, y],
            readings: LastGoodReadings::new(),
            selected: AdcChannel::X,
        }
    }
}

impl AnalogInput for JoystickAdc<'_> {
    fn select_channel(
        &mut self,
        channel: AdcChannel,
    ) {
        self.selected = channel;
    }

    fn read(&mut self) -> u16 {
        let result = self.adc.blocking_read(&mut self.channels[self.selected as usize]);
        self.readings.resolve(self.selected, result)
    }
}

/// Milliseconds since boot from the embassy time driver.
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 { Instant::now().as_millis() }
}

/// PWM slice configuration for the LED channels (counter wraps at 4095).
pub fn led_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_WRAP;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// I2C configuration for the SSD1306 (fast mode).
pub fn display_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
    config
}
