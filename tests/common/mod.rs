//! Simulated hardware for host tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use ir_remote_tx::carrier::avr_timer2::{RegisterBlock, COM2B1};
use ir_remote_tx::{ClockDivider, TimerController, WaveformMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    PinLow,
    PinHigh,
    MaskInterrupts,
    ClockDivider(ClockDivider),
    Mode(WaveformMode),
    Period(u8),
    Duty(u8),
    Connect,
    Disconnect,
    Delay(u16),
}

pub type Log = Rc<RefCell<Vec<Op>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Timer that only records what it is told
pub struct RecordingTimer {
    log: Log,
    connected: bool,
}

impl RecordingTimer {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            connected: false,
        }
    }
}

impl TimerController for RecordingTimer {
    fn mask_interrupts(&mut self) {
        self.log.borrow_mut().push(Op::MaskInterrupts);
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) {
        self.log.borrow_mut().push(Op::ClockDivider(divider));
    }

    fn set_mode(&mut self, mode: WaveformMode) {
        self.log.borrow_mut().push(Op::Mode(mode));
    }

    fn set_period(&mut self, ticks: u8) {
        self.log.borrow_mut().push(Op::Period(ticks));
    }

    fn set_duty(&mut self, ticks: u8) {
        self.log.borrow_mut().push(Op::Duty(ticks));
    }

    fn connect_output(&mut self) {
        self.connected = true;
        self.log.borrow_mut().push(Op::Connect);
    }

    fn disconnect_output(&mut self) {
        self.connected = false;
        self.log.borrow_mut().push(Op::Disconnect);
    }

    fn is_output_connected(&self) -> bool {
        self.connected
    }
}

/// IR LED pin, starts high so that a missing `set_low` shows up
pub struct MockPin {
    log: Option<Log>,
    pub high: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            log: None,
            high: true,
        }
    }

    pub fn logged(log: &Log) -> Self {
        Self {
            log: Some(log.clone()),
            high: true,
        }
    }

    fn record(&self, op: Op) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(op);
        }
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.record(Op::PinLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.record(Op::PinHigh);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

pub struct BrokenPin;

impl OutputPin for BrokenPin {
    type Error = PinFault;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

/// Delay that only records
pub struct LoggedDelay {
    log: Log,
}

impl LoggedDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayUs<u16> for LoggedDelay {
    fn delay_us(&mut self, us: u16) {
        self.log.borrow_mut().push(Op::Delay(us));
    }
}

/// Output state seen during one wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    On,
    Off,
}

/// Simulated clock: samples OC2B connection from the Timer2 registers each
/// time it is asked to wait.
pub struct SimDelay<'a> {
    regs: &'a RegisterBlock,
    pub elapsed_us: u32,
    pub trace: Vec<(Level, u16)>,
}

impl<'a> SimDelay<'a> {
    pub fn new(regs: &'a RegisterBlock) -> Self {
        Self {
            regs,
            elapsed_us: 0,
            trace: Vec::new(),
        }
    }
}

impl DelayUs<u16> for SimDelay<'_> {
    fn delay_us(&mut self, us: u16) {
        let level = if self.regs.tccr2a.get() & COM2B1 != 0 {
            Level::On
        } else {
            Level::Off
        };
        self.elapsed_us += us as u32;
        self.trace.push((level, us));
    }
}
