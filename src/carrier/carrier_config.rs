use fugit_timer::HertzU32;

use crate::config::{FREQ_CONV_FACTOR, MAX_TICKS, MIN_TICKS};
use crate::CarrierError;

/// Tick counts for one carrier cycle.
///
/// `period_ticks` goes to the TOP register, `duty_ticks` to the compare
/// register of the output channel. Always `0 < duty_ticks < period_ticks`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CarrierConfig {
    period_ticks: u8,
    duty_ticks: u8,
}

impl CarrierConfig {
    /// Ticks for the reference 16 MHz timer clock
    pub fn new(frequency_khz: u8) -> Result<Self, CarrierError> {
        Self::with_conversion_factor(FREQ_CONV_FACTOR, frequency_khz)
    }

    /// Integer division truncates: the carrier ends up at the nearest
    /// achievable frequency at or above the requested one.
    pub fn with_conversion_factor(factor: u16, frequency_khz: u8) -> Result<Self, CarrierError> {
        if frequency_khz == 0 {
            return Err(CarrierError::ZeroFrequency);
        }

        let period = factor / frequency_khz as u16;
        if period > MAX_TICKS {
            return Err(CarrierError::PeriodOverflow { period });
        }
        if period < MIN_TICKS {
            return Err(CarrierError::PeriodTooShort { period });
        }

        // 2/3 ON, kept as is: receivers do not care about the exact duty
        let duty = (period * 2) / 3;

        Ok(Self {
            period_ticks: period as u8,
            duty_ticks: duty as u8,
        })
    }

    pub fn period_ticks(&self) -> u8 {
        self.period_ticks
    }

    pub fn duty_ticks(&self) -> u8 {
        self.duty_ticks
    }

    /// Frequency actually produced by the quantized period
    pub fn frequency(&self, factor: u16) -> HertzU32 {
        HertzU32::from_raw(factor as u32 * 1_000 / self.period_ticks as u32)
    }

    pub fn duty_percent(&self) -> u8 {
        (self.duty_ticks as u16 * 100 / self.period_ticks as u16) as u8
    }
}

/// Conversion factor for an arbitrary timer clock, phase correct counting.
///
/// `None` for clocks above ~131 MHz, where the factor no longer fits `u16`.
pub fn conversion_factor(timer_clock: HertzU32) -> Option<u16> {
    u16::try_from(timer_clock.to_Hz() / 2 / 1_000).ok()
}
