//! Analog joystick sampling.
//!
//! The ADC has a single conversion unit shared by all inputs, so each axis is
//! read by first selecting its channel and then starting a conversion. There is
//! no settling delay between the two steps.

use crate::config::MAX_SAMPLE;

/// ADC input channels wired to the joystick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum AdcChannel {
    /// Horizontal axis (ADC0).
    X = 0,
    /// Vertical axis (ADC1).
    Y = 1,
}

/// Single-conversion analog input with a channel multiplexer.
pub trait AnalogInput {
    /// Route `channel` to the converter for subsequent reads.
    fn select_channel(
        &mut self,
        channel: AdcChannel,
    );

    /// Perform one conversion on the selected channel.
    fn read(&mut self) -> u16;
}

/// One raw joystick reading, both axes in `0..=MAX_SAMPLE`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

impl AxisSample {
    /// Create a sample, clamping each axis to the converter range.
    pub const fn new(
        x: u16,
        y: u16,
    ) -> Self {
        Self {
            x: clamp_sample(x),
            y: clamp_sample(y),
        }
    }
}

#[inline]
const fn clamp_sample(raw: u16) -> u16 { if raw > MAX_SAMPLE { MAX_SAMPLE } else { raw } }

/// Read both joystick axes: select X, read, select Y, read.
pub fn sample<A: AnalogInput>(adc: &mut A) -> AxisSample {
    adc.select_channel(AdcChannel::X);
    let x = adc.read();
    adc.select_channel(AdcChannel::Y);
    let y = adc.read();
    AxisSample::new(x, y)
}

/// Last good reading per channel, substituted when a conversion fails.
///
/// Both channels start at 0, so a failure before the first good conversion
/// reads as full deflection towards 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastGoodReadings {
    last: [u16; 2],
}

impl LastGoodReadings {
    pub const fn new() -> Self { Self { last: [0; 2] } }

    /// Pass a successful conversion through (remembering it), or log the
    /// failure and return the channel's last good value.
    pub fn resolve<E>(
        &mut self,
        channel: AdcChannel,
        result: Result<u16, E>,
    ) -> u16 {
        let slot = &mut self.last[channel as usize];
        match result {
            Ok(value) => {
                *slot = value;
                value
            }
            Err(_) => {
                log_warn!("ADC read failed on {}, reusing {}", channel, *slot);
                *slot
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the select/read protocol and answers from per-channel values.
    struct ScriptedAdc {
        values: [u16; 2],
        selected: Option<AdcChannel>,
        log: Vec<&'static str>,
    }

    impl ScriptedAdc {
        fn new(
            x: u16,
            y: u16,
        ) -> Self {
            Self {
                values: [x, y],
                selected: None,
                log: Vec::new(),
            }
        }
    }

    impl AnalogInput for ScriptedAdc {
        fn select_channel(
            &mut self,
            channel: AdcChannel,
        ) {
            self.selected = Some(channel);
            self.log.push(match channel {
                AdcChannel::X => "select X",
                AdcChannel::Y => "select Y",
            });
        }

        fn read(&mut self) -> u16 {
            self.log.push("read");
            let channel = self.selected.expect("read before select");
            self.values[channel as usize]
        }
    }

    #[test]
    fn test_sample_reads_both_axes() {
        let mut adc = ScriptedAdc::new(100, 3900);
        assert_eq!(sample(&mut adc), AxisSample { x: 100, y: 3900 });
    }

    #[test]
    fn test_sample_select_read_order() {
        let mut adc = ScriptedAdc::new(1, 2);
        sample(&mut adc);
        assert_eq!(adc.log, ["select X", "read", "select Y", "read"]);
    }

    #[test]
    fn test_sample_leaves_y_selected() {
        let mut adc = ScriptedAdc::new(1, 2);
        sample(&mut adc);
        assert_eq!(adc.selected, Some(AdcChannel::Y));
    }

    #[test]
    fn test_out_of_range_reading_clamped() {
        let mut adc = ScriptedAdc::new(4096, u16::MAX);
        assert_eq!(sample(&mut adc), AxisSample { x: MAX_SAMPLE, y: MAX_SAMPLE });
    }

    #[test]
    fn test_failure_before_first_reading_returns_zero() {
        let mut readings = LastGoodReadings::new();
        assert_eq!(readings.resolve(AdcChannel::X, Err(())), 0);
        assert_eq!(readings.resolve(AdcChannel::Y, Err(())), 0);
    }

    #[test]
    fn test_failure_repeats_last_good_reading() {
        let mut readings = LastGoodReadings::new();
        assert_eq!(readings.resolve::<()>(AdcChannel::X, Ok(1234)), 1234);
        assert_eq!(readings.resolve(AdcChannel::X, Err(())), 1234);
        assert_eq!(readings.resolve(AdcChannel::X, Err(())), 1234);
        assert_eq!(readings.resolve::<()>(AdcChannel::X, Ok(17)), 17);
        assert_eq!(readings.resolve(AdcChannel::X, Err(())), 17);
    }

    #[test]
    fn test_channels_keep_separate_readings() {
        let mut readings = LastGoodReadings::new();
        readings.resolve::<()>(AdcChannel::X, Ok(100));
        readings.resolve::<()>(AdcChannel::Y, Ok(3900));
        assert_eq!(readings.resolve(AdcChannel::Y, Err(())), 3900);
        assert_eq!(readings.resolve(AdcChannel::X, Err(())), 100);
    }

    #[test]
    fn test_channel_indices() {
        assert_eq!(AdcChannel::X as u8, 0);
        assert_eq!(AdcChannel::Y as u8, 1);
    }
}
