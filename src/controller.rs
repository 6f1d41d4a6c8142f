//! Main loop driver.
//!
//! [`Controller`] owns all state that survives between cycles (mode, debounce
//! timers, frame). [`Peripherals`] bundles the hardware services it drives;
//! they are injected as `embedded-hal` traits plus the crate's own
//! [`AnalogInput`], [`FrameSink`] and [`Clock`], so the whole loop runs on the
//! host against fakes.
//!
//! One cycle ([`Controller::tick`]):
//!
//! 1. Sample both joystick axes
//! 2. Poll both buttons (debounce + latch) and apply mode transitions
//! 3. Write PWM duty levels (zero while PWM is disabled)
//! 4. Compose and transmit the display frame
//!
//! [`run_forever`] repeats that every [`LOOP_PERIOD_MS`].

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

use crate::config::LOOP_PERIOD_MS;
use crate::debounce::Debouncer;
use crate::display::{FrameSink, Framebuffer};
use crate::mapping::{CursorPosition, IntensityPair, map_intensity, map_position};
use crate::mode::ModeState;
use crate::render::Compositor;
use crate::sampler::{self, AnalogInput, AxisSample};

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since boot.
    fn now_ms(&self) -> u64;
}

/// Hardware services driven by the main loop.
pub struct Peripherals<A, B, L, P, S, C> {
    /// Joystick ADC (X on channel 0, Y on channel 1).
    pub adc: A,
    /// Joystick push button (active-low).
    pub joystick_button: B,
    /// Auxiliary push button (active-low).
    pub aux_button: B,
    /// Green indicator LED.
    pub green_led: L,
    /// Red LED PWM channel, driven by X deflection.
    pub red_pwm: P,
    /// Blue LED PWM channel, driven by Y deflection.
    pub blue_pwm: P,
    /// Display transport.
    pub display: S,
    pub clock: C,
}

/// What happened during one cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CycleReport {
    pub sample: AxisSample,
    pub cursor: CursorPosition,
    /// Mapped intensities before PWM enable and clamping.
    pub intensity: IntensityPair,
    /// Levels actually written to the red (x) and blue (y) channels.
    pub duty: IntensityPair,
    pub joystick_activated: bool,
    pub aux_activated: bool,
    /// False if the display transport reported an error.
    pub frame_sent: bool,
}

/// Main loop context: everything that persists across cycles.
pub struct Controller {
    mode: ModeState,
    joystick_debounce: Debouncer,
    aux_debounce: Debouncer,
    compositor: Compositor,
}

impl Controller {
    pub const fn new() -> Self {
        Self {
            mode: ModeState::new(),
            joystick_debounce: Debouncer::new(),
            aux_debounce: Debouncer::new(),
            compositor: Compositor::new(),
        }
    }

    #[inline]
    pub const fn mode(&self) -> &ModeState { &self.mode }

    /// Frame composed during the last cycle.
    #[inline]
    pub const fn frame(&self) -> &Framebuffer { self.compositor.frame() }

    /// Put the outputs into their boot state: green LED off, both PWM
    /// channels dark, blank frame on the display.
    pub fn start<A, B, L, P, S, C>(
        &mut self,
        io: &mut Peripherals<A, B, L, P, S, C>,
    ) where
        L: OutputPin,
        P: SetDutyCycle,
        S: FrameSink,
    {
        io.green_led.set_state(PinState::from(self.mode.indicator_on)).ok();
        write_duty(&mut io.red_pwm, 0);
        write_duty(&mut io.blue_pwm, 0);
        if io.display.transmit(&Framebuffer::new()).is_err() {
            log_warn!("Display transmit failed (blank frame)");
        }
    }

    /// Run one cycle of the main loop.
    pub fn tick<A, B, L, P, S, C>(
        &mut self,
        io: &mut Peripherals<A, B, L, P, S, C>,
    ) -> CycleReport
    where
        A: AnalogInput,
        B: InputPin,
        L: OutputPin,
        P: SetDutyCycle,
        S: FrameSink,
        C: Clock,
    {
        let sample = sampler::sample(&mut io.adc);
        let now_ms = io.clock.now_ms();

        // Joystick button: green LED + border style
        let joystick_pressed = io.joystick_button.is_low().unwrap_or(false);
        let debounced = self.joystick_debounce.poll(joystick_pressed, now_ms);
        let joystick_activated = self.mode.on_joystick_button(debounced, joystick_pressed);
        if joystick_activated {
            io.green_led.set_state(PinState::from(self.mode.indicator_on)).ok();
            log_info!(
                "Joystick button: green LED {}, border {}",
                self.mode.indicator_on,
                self.mode.border_style
            );
        }

        // Auxiliary button: PWM enable
        let aux_pressed = io.aux_button.is_low().unwrap_or(false);
        let debounced = self.aux_debounce.poll(aux_pressed, now_ms);
        let aux_activated = self.mode.on_aux_button(debounced, aux_pressed);
        if aux_activated {
            log_info!("Aux button: PWM {}", if self.mode.pwm_enabled { "ON" } else { "OFF" });
        }

        let intensity = map_intensity(sample);
        let levels = self.mode.duty_levels(intensity);
        let duty = IntensityPair {
            x: write_duty(&mut io.red_pwm, levels.x),
            y: write_duty(&mut io.blue_pwm, levels.y),
        };

        let cursor = map_position(sample);
        let frame_sent = self
            .compositor
            .render(&self.mode, cursor, sample, &mut io.display)
            .is_ok();
        if !frame_sent {
            log_warn!("Display transmit failed");
        }

        CycleReport {
            sample,
            cursor,
            intensity,
            duty,
            joystick_activated,
            aux_activated,
            frame_sent,
        }
    }
}

impl Default for Controller {
    fn default() -> Self { Self::new() }
}

/// Write a duty level, clamped to the channel's maximum. Returns the level
/// written.
fn write_duty<P: SetDutyCycle>(
    pwm: &mut P,
    level: u16,
) -> u16 {
    let level = level.min(pwm.max_duty_cycle());
    pwm.set_duty_cycle(level).ok();
    level
}

/// Bring the outputs up and run the control loop until power-off.
pub async fn run_forever<A, B, L, P, S, C, D>(
    mut controller: Controller,
    mut io: Peripherals<A, B, L, P, S, C>,
    mut delay: D,
) -> !
where
    A: AnalogInput,
    B: InputPin,
    L: OutputPin,
    P: SetDutyCycle,
    S: FrameSink,
    C: Clock,
    D: DelayNs,
{
    controller.start(&mut io);
    log_info!("Main loop starting ({} ms period)", LOOP_PERIOD_MS);

    loop {
        let report = controller.tick(&mut io);
        log_debug!(
            "x={} y={} duty={}/{}",
            report.sample.x,
            report.sample.y,
            report.duty.x,
            report.duty.y
        );
        delay.delay_ms(LOOP_PERIOD_MS).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
