//! Mode state driven by button activations.
//!
//! - Joystick button: toggles the green LED and advances the [`BorderStyle`]
//! - Auxiliary button: toggles PWM output on the red/blue LEDs
//!
//! Each button owns a latch here so that one physical press produces exactly
//! one transition, however long it is held (see [`crate::debounce`]).

use crate::debounce::latch_activation;
use crate::mapping::IntensityPair;

/// Display border drawn around the drawing area.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum BorderStyle {
    /// Hollow rectangle.
    #[default]
    Outline,
    /// Top and bottom edges only.
    Rails,
    /// Filled rectangle.
    Solid,
}

impl BorderStyle {
    /// Cycle to the next style: Outline -> Rails -> Solid -> Outline
    pub const fn next(self) -> Self {
        match self {
            Self::Outline => Self::Rails,
            Self::Rails => Self::Solid,
            Self::Solid => Self::Outline,
        }
    }

    #[cfg(test)]
    pub(crate) const fn index(self) -> u8 {
        match self {
            Self::Outline => 0,
            Self::Rails => 1,
            Self::Solid => 2,
        }
    }
}

/// Everything the buttons can change, owned by the main loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModeState {
    pub border_style: BorderStyle,
    pub pwm_enabled: bool,
    /// Green LED state.
    pub indicator_on: bool,
    joystick_latched: bool,
    aux_latched: bool,
}

impl ModeState {
    /// Boot state: outline border, PWM on, green LED off, no button latched.
    pub const fn new() -> Self {
        Self {
            border_style: BorderStyle::Outline,
            pwm_enabled: true,
            indicator_on: false,
            joystick_latched: false,
            aux_latched: false,
        }
    }

    /// Feed the joystick button's debounced activation and raw line state.
    ///
    /// Returns true if the press was accepted (indicator toggled, border
    /// advanced).
    pub fn on_joystick_button(
        &mut self,
        debounced: bool,
        is_pressed: bool,
    ) -> bool {
        let fired = latch_activation(&mut self.joystick_latched, debounced, is_pressed);
        if fired {
            self.indicator_on = !self.indicator_on;
            self.border_style = self.border_style.next();
        }
        fired
    }

    /// Feed the auxiliary button's debounced activation and raw line state.
    ///
    /// Returns true if the press was accepted (PWM output toggled).
    pub fn on_aux_button(
        &mut self,
        debounced: bool,
        is_pressed: bool,
    ) -> bool {
        let fired = latch_activation(&mut self.aux_latched, debounced, is_pressed);
        if fired {
            self.pwm_enabled = !self.pwm_enabled;
        }
        fired
    }

    /// Duty levels to drive: the mapped intensities, or zero while PWM is off.
    pub const fn duty_levels(
        &self,
        intensity: IntensityPair,
    ) -> IntensityPair {
        if self.pwm_enabled { intensity } else { IntensityPair::OFF }
    }

    #[cfg(test)]
    pub(crate) const fn joystick_latched(&self) -> bool { self.joystick_latched }

    #[cfg(test)]
    pub(crate) const fn aux_latched(&self) -> bool { self.aux_latched }
}

impl Default for ModeState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Press and release once with a debounced activation.
    fn click_joystick(mode: &mut ModeState) -> bool {
        let fired = mode.on_joystick_button(true, true);
        mode.on_joystick_button(false, false);
        fired
    }

    fn click_aux(mode: &mut ModeState) -> bool {
        let fired = mode.on_aux_button(true, true);
        mode.on_aux_button(false, false);
        fired
    }

    #[test]
    fn test_initial_state() {
        let mode = ModeState::new();
        assert_eq!(mode.border_style, BorderStyle::Outline);
        assert!(mode.pwm_enabled);
        assert!(!mode.indicator_on);
        assert!(!mode.joystick_latched());
        assert!(!mode.aux_latched());
    }

    #[test]
    fn test_border_style_cycle() {
        assert_eq!(BorderStyle::Outline.next(), BorderStyle::Rails);
        assert_eq!(BorderStyle::Rails.next(), BorderStyle::Solid);
        assert_eq!(BorderStyle::Solid.next(), BorderStyle::Outline);
    }

    #[test]
    fn test_border_style_index() {
        assert_eq!(BorderStyle::Outline.index(), 0);
        assert_eq!(BorderStyle::Rails.index(), 1);
        assert_eq!(BorderStyle::Solid.index(), 2);
    }

    #[test]
    fn test_joystick_press_cycles_style_and_indicator() {
        let mut mode = ModeState::new();
        let mut styles = Vec::new();
        for _ in 0..4 {
            assert!(click_joystick(&mut mode));
            styles.push(mode.border_style.index());
        }
        assert_eq!(styles, [1, 2, 0, 1]);
        // Four toggles bring the indicator back to off
        assert!(!mode.indicator_on);
        assert!(mode.pwm_enabled);
    }

    #[test]
    fn test_aux_press_toggles_pwm_only() {
        let mut mode = ModeState::new();
        assert!(click_aux(&mut mode));
        assert!(!mode.pwm_enabled);
        assert_eq!(mode.border_style, BorderStyle::Outline);
        assert!(!mode.indicator_on);
        assert!(click_aux(&mut mode));
        assert!(mode.pwm_enabled);
    }

    #[test]
    fn test_held_button_single_transition() {
        let mut mode = ModeState::new();
        assert!(mode.on_joystick_button(true, true));
        for _ in 0..10 {
            assert!(!mode.on_joystick_button(true, true));
        }
        assert_eq!(mode.border_style, BorderStyle::Rails);
        assert!(mode.indicator_on);
    }

    #[test]
    fn test_latches_independent() {
        let mut mode = ModeState::new();
        mode.on_joystick_button(true, true);
        assert!(mode.joystick_latched());
        assert!(mode.on_aux_button(true, true));
        assert!(mode.aux_latched());
    }

    #[test]
    fn test_duty_levels_follow_pwm_enable() {
        let mut mode = ModeState::new();
        let intensity = IntensityPair { x: 4096, y: 4094 };
        assert_eq!(mode.duty_levels(intensity), intensity);
        mode.pwm_enabled = false;
        assert_eq!(mode.duty_levels(intensity), IntensityPair::OFF);
    }
}
