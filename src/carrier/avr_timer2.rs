//! ATmega328P Timer/Counter2 carrier backend.
//!
//! OCR2A holds TOP (carrier period), OCR2B the duty value, carrier comes out
//! on OC2B (Arduino pin 3). Phase correct PWM at full clock rate gives much
//! finer steps around 36-38 kHz than fast PWM with a /8 prescaler.

use vcell::VolatileCell;

use super::{ClockDivider, TimerController, WaveformMode};

// TCCR2A
pub const COM2A1: u8 = 1 << 7;
pub const COM2A0: u8 = 1 << 6;
pub const COM2B1: u8 = 1 << 5;
pub const COM2B0: u8 = 1 << 4;
pub const WGM21: u8 = 1 << 1;
pub const WGM20: u8 = 1 << 0;

// TCCR2B
pub const WGM22: u8 = 1 << 3;
pub const CS22: u8 = 1 << 2;
pub const CS21: u8 = 1 << 1;
pub const CS20: u8 = 1 << 0;

// TIMSK2
pub const OCIE2B: u8 = 1 << 2;
pub const OCIE2A: u8 = 1 << 1;
pub const TOIE2: u8 = 1 << 0;

const TCCR2A_ADDR: usize = 0xB0;
const TIMSK2_ADDR: usize = 0x70;

/// TCCR2A..OCR2B, contiguous in the data space
#[repr(C)]
pub struct RegisterBlock {
    pub tccr2a: VolatileCell<u8>,
    pub tccr2b: VolatileCell<u8>,
    pub tcnt2: VolatileCell<u8>,
    pub ocr2a: VolatileCell<u8>,
    pub ocr2b: VolatileCell<u8>,
}

impl RegisterBlock {
    /// Zeroed block, the reset state of the timer
    pub const fn new() -> Self {
        Self {
            tccr2a: VolatileCell::new(0),
            tccr2b: VolatileCell::new(0),
            tcnt2: VolatileCell::new(0),
            ocr2a: VolatileCell::new(0),
            ocr2b: VolatileCell::new(0),
        }
    }
}

impl Default for RegisterBlock {
    fn default() -> Self {
        Self::new()
    }
}

fn modify(reg: &VolatileCell<u8>, f: impl FnOnce(u8) -> u8) {
    reg.set(f(reg.get()));
}

pub struct Timer2<'a> {
    regs: &'a RegisterBlock,
    timsk2: &'a VolatileCell<u8>,
}

impl<'a> Timer2<'a> {
    pub fn new(regs: &'a RegisterBlock, timsk2: &'a VolatileCell<u8>) -> Self {
        Self { regs, timsk2 }
    }

    /// # Safety
    /// Only valid on an ATmega328P, and only once: the returned value claims
    /// the whole Timer2 peripheral.
    pub unsafe fn steal() -> Timer2<'static> {
        Timer2 {
            regs: &*(TCCR2A_ADDR as *const RegisterBlock),
            timsk2: &*(TIMSK2_ADDR as *const VolatileCell<u8>),
        }
    }

    pub fn registers(&self) -> &RegisterBlock {
        self.regs
    }
}

impl TimerController for Timer2<'_> {
    fn mask_interrupts(&mut self) {
        modify(self.timsk2, |v| v & !(OCIE2A | OCIE2B | TOIE2));
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) {
        modify(&self.regs.tccr2b, |v| match divider {
            ClockDivider::Div1 => (v & !(CS21 | CS22)) | CS20,
            ClockDivider::Div8 => (v & !(CS20 | CS22)) | CS21,
        });
    }

    fn set_mode(&mut self, mode: WaveformMode) {
        // WGM22:0 = 101 / 111, TOP = OCR2A in both
        match mode {
            WaveformMode::PhaseCorrect => modify(&self.regs.tccr2a, |v| (v & !WGM21) | WGM20),
            WaveformMode::Fast => modify(&self.regs.tccr2a, |v| v | WGM21 | WGM20),
        }
        modify(&self.regs.tccr2b, |v| v | WGM22);
    }

    fn set_period(&mut self, ticks: u8) {
        self.regs.ocr2a.set(ticks);
    }

    fn set_duty(&mut self, ticks: u8) {
        self.regs.ocr2b.set(ticks);
    }

    fn connect_output(&mut self) {
        // non-inverting: clear OC2B on up-count match
        modify(&self.regs.tccr2a, |v| v | COM2B1);
    }

    fn disconnect_output(&mut self) {
        // OC2A too, WGM22 would toggle it on compare match
        modify(&self.regs.tccr2a, |v| v & !(COM2A0 | COM2A1 | COM2B0 | COM2B1));
    }

    fn is_output_connected(&self) -> bool {
        self.regs.tccr2a.get() & COM2B1 != 0
    }
}
