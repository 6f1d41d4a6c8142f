//! Joystick / OLED firmware for Raspberry Pi Pico 2 (RP2350), BitDogLab wiring.
//!
//! Every 50 ms the main loop samples the joystick, drives the red (X) and blue
//! (Y) LEDs by PWM from the stick deflection, and draws the stick position
//! plus the raw readings on the SSD1306 OLED.
//!
//! # Button Controls
//!
//! - **Joystick button**: toggle the green LED, cycle the display border
//!   (outline -> rails -> solid)
//! - **A**: enable/disable the PWM LEDs
//!
//! All control logic lives in the `joystick_oled` library; this binary only
//! claims the peripherals and hands them to [`joystick_oled::run_forever`].
//! On the host it builds to a stub that points at the simulator.

#![cfg_attr(target_arch = "arm", no_std, no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod board;

#[cfg(target_arch = "arm")]
use defmt::{info, unwrap, warn};
#[cfg(target_arch = "arm")]
use embassy_executor::Spawner;
#[cfg(target_arch = "arm")]
use embassy_rp::adc::{self, Adc, Channel};
#[cfg(target_arch = "arm")]
use embassy_rp::block::ImageDef;
#[cfg(target_arch = "arm")]
use embassy_rp::gpio::{Input, Level, Output, Pull};
#[cfg(target_arch = "arm")]
use embassy_rp::i2c::I2c;
#[cfg(target_arch = "arm")]
use embassy_rp::pwm::Pwm;
#[cfg(target_arch = "arm")]
use embassy_time::Delay;
#[cfg(target_arch = "arm")]
use joystick_oled::config::{
    AUX_BUTTON_PIN,
    BLUE_LED_PIN,
    DISPLAY_I2C_ADDRESS,
    DISPLAY_SCL_PIN,
    DISPLAY_SDA_PIN,
    GREEN_LED_PIN,
    JOYSTICK_BUTTON_PIN,
    JOYSTICK_X_PIN,
    JOYSTICK_Y_PIN,
    RED_LED_PIN,
};
#[cfg(target_arch = "arm")]
use joystick_oled::{Controller, Peripherals, Ssd1306, run_forever};
#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_arch = "arm")]
use crate::board::{JoystickAdc, MonotonicClock, display_i2c_config, led_pwm_config};

// Boot ROM image definition (RP2350)
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"joystick-oled"),
    embassy_rp::binary_info::rp_program_description!(c"Joystick-driven PWM LEDs and SSD1306 OLED (BitDogLab)"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joystick OLED firmware starting...");
    let p = embassy_rp::init(Default::default());

    // ===== Joystick (ADC0 / ADC1) =====
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let x_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let y_channel = Channel::new_pin(p.PIN_27, Pull::None);
    let joystick = JoystickAdc::new(adc, x_channel, y_channel);
    info!("Joystick ADC: X=GPIO{} Y=GPIO{}", JOYSTICK_X_PIN, JOYSTICK_Y_PIN);

    // ===== Buttons (active-low with internal pull-up) =====
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let aux_button = Input::new(p.PIN_5, Pull::Up);
    info!("Buttons: joystick=GPIO{} aux=GPIO{}", JOYSTICK_BUTTON_PIN, AUX_BUTTON_PIN);

    // ===== LEDs =====
    let green_led = Output::new(p.PIN_11, Level::Low);
    // Slice 6: channel A = GPIO12 (blue), channel B = GPIO13 (red)
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, led_pwm_config());
    let (blue_pwm, red_pwm) = pwm.split();
    let blue_pwm = unwrap!(blue_pwm);
    let red_pwm = unwrap!(red_pwm);
    info!(
        "LEDs: green=GPIO{} blue=GPIO{} (PWM) red=GPIO{} (PWM)",
        GREEN_LED_PIN,
        BLUE_LED_PIN,
        RED_LED_PIN
    );

    // ===== Display (SSD1306 on I2C1) =====
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, display_i2c_config());
    let mut display = Ssd1306::new(i2c, DISPLAY_I2C_ADDRESS);
    match display.init() {
        Ok(()) => info!(
            "Display initialized ({:#x}, SDA=GPIO{} SCL=GPIO{})",
            DISPLAY_I2C_ADDRESS,
            DISPLAY_SDA_PIN,
            DISPLAY_SCL_PIN
        ),
        Err(_) => warn!("Display init failed, continuing without acknowledgement"),
    }

    let io = Peripherals {
        adc: joystick,
        joystick_button,
        aux_button,
        green_led,
        red_pwm,
        blue_pwm,
        display,
        clock: MonotonicClock,
    };

    run_forever(Controller::new(), io, Delay).await
}

#[cfg(not(target_arch = "arm"))]
fn main() {
    println!("joystick-oled firmware targets the RP2350 (thumbv8m.main-none-eabihf).");
    println!("Run the desktop simulator instead: cd simulator && cargo run");
}
