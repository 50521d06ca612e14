/// Timer clock prescaler
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClockDivider {
    Div1,
    Div8,
}

impl ClockDivider {
    pub fn factor(&self) -> u16 {
        match self {
            ClockDivider::Div1 => 1,
            ClockDivider::Div8 => 8,
        }
    }
}

/// Counting mode, TOP is always the period register
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WaveformMode {
    /// Up to TOP then back down to 0, symmetric output
    PhaseCorrect,
    /// Up to TOP then reset to 0
    Fast,
}

/// Carrier timer capability.
///
/// The implementor owns the timer registers. Once period, duty and mode are
/// programmed the counter free-runs; only the output connection changes while
/// a command is sent.
pub trait TimerController {
    /// Disable every interrupt source of the timer
    fn mask_interrupts(&mut self);
    fn set_clock_divider(&mut self, divider: ClockDivider);
    fn set_mode(&mut self, mode: WaveformMode);
    fn set_period(&mut self, ticks: u8);
    fn set_duty(&mut self, ticks: u8);

    /// Route the compare output to the pin
    fn connect_output(&mut self);
    /// Detach the compare output, pin falls back to its idle level
    fn disconnect_output(&mut self);
    fn is_output_connected(&self) -> bool;
}
