//! STM32F1 TIM4 channel 1 (PB6) carrier backend.
//!
//! Center-aligned mode 1 plays the part of phase correct PWM: ARR is TOP,
//! CCR1 the duty value, CC1E connects OC1 to the pin.

use core::convert::Infallible;

use stm32f1xx_hal::gpio::{Alternate, PushPull, PB6};
use stm32f1xx_hal::pac::TIM4;

use super::{ClockDivider, TimerController, WaveformMode};

const CR1_CEN: u32 = 1 << 0;
const CR1_CMS_MASK: u32 = 0b11 << 5;
const CR1_CMS_CENTER1: u32 = 0b01 << 5;
const CR1_ARPE: u32 = 1 << 7;

const CCMR1_OC1PE: u32 = 1 << 3;
const CCMR1_OC1M_MASK: u32 = 0b111 << 4;
const CCMR1_OC1M_FORCE_ACTIVE: u32 = 0b101 << 4;
const CCMR1_OC1M_PWM1: u32 = 0b110 << 4;

const CCER_CC1E: u32 = 1 << 0;
const CCER_CC1P: u32 = 1 << 1;

const EGR_UG: u32 = 1 << 0;

// PB6 pin adapter only, the carrier goes through its owned TIM4
fn regs() -> &'static stm32f1xx_hal::pac::tim2::RegisterBlock {
    unsafe { &*TIM4::ptr() }
}

pub struct Tim4Carrier {
    tim: TIM4,
}

impl Tim4Carrier {
    pub fn new(tim: TIM4) -> Self {
        Self { tim }
    }

    pub fn release(self) -> TIM4 {
        self.tim
    }
}

impl TimerController for Tim4Carrier {
    fn mask_interrupts(&mut self) {
        self.tim.dier.write(|w| unsafe { w.bits(0) });
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) {
        let psc = divider.factor() as u32 - 1;
        self.tim.psc.write(|w| unsafe { w.bits(psc) });
    }

    fn set_mode(&mut self, mode: WaveformMode) {
        let tim = &self.tim;
        tim.cr1.modify(|r, w| unsafe { w.bits(r.bits() & !CR1_CEN) });

        tim.ccmr1_output().modify(|r, w| unsafe {
            w.bits((r.bits() & !CCMR1_OC1M_MASK) | CCMR1_OC1M_PWM1 | CCMR1_OC1PE)
        });
        tim.ccer
            .modify(|r, w| unsafe { w.bits(r.bits() & !CCER_CC1P) });

        let cms = match mode {
            WaveformMode::PhaseCorrect => CR1_CMS_CENTER1,
            WaveformMode::Fast => 0,
        };
        tim.cr1
            .modify(|r, w| unsafe { w.bits((r.bits() & !CR1_CMS_MASK) | cms | CR1_ARPE) });

        // latch preloaded ARR/CCR1 and start
        tim.egr.write(|w| unsafe { w.bits(EGR_UG) });
        tim.cr1.modify(|r, w| unsafe { w.bits(r.bits() | CR1_CEN) });
    }

    fn set_period(&mut self, ticks: u8) {
        self.tim.arr.write(|w| unsafe { w.bits(ticks as u32) });
    }

    fn set_duty(&mut self, ticks: u8) {
        self.tim.ccr1.write(|w| unsafe { w.bits(ticks as u32) });
    }

    fn connect_output(&mut self) {
        self.tim
            .ccer
            .modify(|r, w| unsafe { w.bits(r.bits() | CCER_CC1E) });
    }

    fn disconnect_output(&mut self) {
        self.tim
            .ccer
            .modify(|r, w| unsafe { w.bits(r.bits() & !CCER_CC1E) });
    }

    fn is_output_connected(&self) -> bool {
        self.tim.ccer.read().bits() & CCER_CC1E != 0
    }
}

/// PB6 while it carries TIM4_CH1.
///
/// The pin stays in alternate function mode, its level is set through the
/// channel: low is "output disabled", high is OC1 forced active.
pub struct Tim4Ch1Pin {
    _pin: PB6<Alternate<PushPull>>,
}

impl Tim4Ch1Pin {
    pub fn new(pin: PB6<Alternate<PushPull>>) -> Self {
        Self { _pin: pin }
    }
}

impl embedded_hal::digital::v2::OutputPin for Tim4Ch1Pin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let tim = regs();
        tim.ccer
            .modify(|r, w| unsafe { w.bits(r.bits() & !CCER_CC1E) });
        tim.ccmr1_output().modify(|r, w| unsafe {
            w.bits((r.bits() & !CCMR1_OC1M_MASK) | CCMR1_OC1M_PWM1)
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let tim = regs();
        tim.ccmr1_output().modify(|r, w| unsafe {
            w.bits((r.bits() & !CCMR1_OC1M_MASK) | CCMR1_OC1M_FORCE_ACTIVE)
        });
        tim.ccer
            .modify(|r, w| unsafe { w.bits(r.bits() | CCER_CC1E) });
        Ok(())
    }
}
