pub const MCU_XTAL_HZ: u32 = 8_000_000;

//-----------------------------------------------------------------------------

/// Timer clock of the reference board (ATmega328P @ 16 MHz, no prescale)
pub const TIMER_CLOCK_HZ: u32 = 16_000_000;

/// Phase correct PWM counts up and down, so one carrier period takes
/// 2 * TOP ticks. Divide by 1000 more to accept the frequency in kHz.
pub const FREQ_CONV_FACTOR: u16 = (TIMER_CLOCK_HZ / 2 / 1_000) as u16;

pub const MIN_TICKS: u16 = 2;
pub const MAX_TICKS: u16 = u8::MAX as u16;

//-----------------------------------------------------------------------------

pub const DEFAULT_CARRIER_KHZ: u8 = 38;

/// Pause between repeated demo transmissions, in core clock cycles
pub const REPEAT_GAP_CYCLES: u32 = MCU_XTAL_HZ / 10;
