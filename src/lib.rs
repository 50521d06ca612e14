#![no_std]

pub mod config;

mod error;
pub use error::{CarrierError, Error};

pub mod carrier;
pub use carrier::{conversion_factor, CarrierConfig, ClockDivider, TimerController, WaveformMode};

pub mod command;
pub use command::{CommandBuffer, Pulse};

mod ir_remote;
pub use ir_remote::IrRemote;
