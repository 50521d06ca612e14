use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::carrier::{CarrierConfig, ClockDivider, TimerController, WaveformMode};
use crate::command::{self, Pulse};
use crate::{config, Error};

/// IR transmitter.
///
/// Owns the carrier timer, the IR LED pin and the microsecond delay. The
/// timer must not be shared: `initialise` rewrites its whole configuration.
/// Sending blocks the caller for the full airtime of the command.
pub struct IrRemote<TIM, PIN, DELAY> {
    timer: TIM,
    pin: PIN,
    delay: DELAY,
    conversion_factor: u16,
    carrier: Option<CarrierConfig>,
}

impl<TIM, PIN, DELAY, E> IrRemote<TIM, PIN, DELAY>
where
    TIM: TimerController,
    PIN: OutputPin<Error = E>,
    DELAY: DelayUs<u16>,
{
    pub fn new(timer: TIM, pin: PIN, delay: DELAY) -> Self {
        Self {
            timer,
            pin,
            delay,
            conversion_factor: config::FREQ_CONV_FACTOR,
            carrier: None,
        }
    }

    /// Timer clock other than the reference 16 MHz, see [`crate::conversion_factor`].
    ///
    /// Drops any programmed carrier: the timer still runs the old ticks, so
    /// `initialise` has to run again before sending.
    pub fn with_conversion_factor(mut self, factor: u16) -> Self {
        self.conversion_factor = factor;
        self.carrier = None;
        self
    }

    /// Program the carrier. Must run before the first `send_command`.
    ///
    /// The timer is left free-running with its output detached and the pin
    /// driven low. Nothing is touched if the frequency is rejected.
    pub fn initialise(&mut self, frequency_khz: u8) -> Result<CarrierConfig, Error<E>> {
        let carrier = CarrierConfig::with_conversion_factor(self.conversion_factor, frequency_khz)
            .map_err(|e| {
                log::warn!("carrier {} kHz rejected: {}", frequency_khz, e);
                e
            })?;

        self.pin.set_low().map_err(Error::Pin)?;

        self.timer.mask_interrupts();
        self.timer.set_clock_divider(ClockDivider::Div1);
        self.timer.set_period(carrier.period_ticks());
        self.timer.set_duty(carrier.duty_ticks());
        self.timer.set_mode(WaveformMode::PhaseCorrect);
        self.timer.disconnect_output();

        log::debug!(
            "carrier {} kHz: period {} duty {} ticks, {} Hz",
            frequency_khz,
            carrier.period_ticks(),
            carrier.duty_ticks(),
            carrier.frequency(self.conversion_factor).to_Hz()
        );

        self.carrier = Some(carrier);
        Ok(carrier)
    }

    /// Send one command, see [`Pulse`] for the table format.
    ///
    /// Nothing is sent if the table has no terminator; pulses past the
    /// terminator are ignored.
    pub fn send_command(&mut self, command: &[Pulse]) -> Result<(), Error<E>> {
        if self.carrier.is_none() {
            return Err(Error::NotInitialised);
        }

        let len = match command::terminated_len(command) {
            Some(len) => len,
            None => {
                log::warn!("command of {} pulses has no terminator", command.len());
                return Err(Error::Unterminated);
            }
        };

        log::trace!(
            "sending {} pulses, {} us",
            len,
            command::total_duration(&command[..len]).map_or(0, |d| d.to_micros())
        );

        for pulse in &command[..len] {
            self.timer.connect_output();
            self.delay.delay_us(pulse.on_us);
            self.timer.disconnect_output();

            if pulse.is_terminator() {
                break;
            }
            self.delay.delay_us(pulse.off_us);
        }

        log::trace!("command sent");
        Ok(())
    }

    pub fn carrier(&self) -> Option<CarrierConfig> {
        self.carrier
    }

    pub fn is_initialised(&self) -> bool {
        self.carrier.is_some()
    }

    pub fn conversion_factor(&self) -> u16 {
        self.conversion_factor
    }

    pub fn free(self) -> (TIM, PIN, DELAY) {
        (self.timer, self.pin, self.delay)
    }
}
