mod carrier_config;
pub use carrier_config::{conversion_factor, CarrierConfig};

mod timer_controller;
pub use timer_controller::{ClockDivider, TimerController, WaveformMode};

pub mod avr_timer2;

#[cfg(feature = "stm32f103")]
pub mod stm32_tim;
