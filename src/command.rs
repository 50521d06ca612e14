use core::fmt;

use fugit_timer::ExtU32;

/// One ON/OFF step of a command, microseconds.
///
/// `off_us == 0` terminates the command: the ON part is still sent, the OFF
/// part is never waited on. A zero length gap in the middle of a command
/// therefore cannot be expressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pulse {
    pub on_us: u16,
    pub off_us: u16,
}

impl Pulse {
    pub const fn new(on_us: u16, off_us: u16) -> Self {
        Self { on_us, off_us }
    }

    /// Final ON burst
    pub const fn last(on_us: u16) -> Self {
        Self { on_us, off_us: 0 }
    }

    pub fn is_terminator(&self) -> bool {
        self.off_us == 0
    }
}

impl From<(u16, u16)> for Pulse {
    fn from((on_us, off_us): (u16, u16)) -> Self {
        Self { on_us, off_us }
    }
}

impl From<[u16; 2]> for Pulse {
    fn from([on_us, off_us]: [u16; 2]) -> Self {
        Self { on_us, off_us }
    }
}

/// Number of pulses up to and including the terminator
pub fn terminated_len(command: &[Pulse]) -> Option<usize> {
    command
        .iter()
        .position(Pulse::is_terminator)
        .map(|i| i + 1)
}

/// Time the transmitter is busy sending `command`.
///
/// `None` if the command is unterminated or its airtime does not fit `u32`
/// microseconds.
pub fn total_duration(command: &[Pulse]) -> Option<fugit_timer::Duration<u32, 1, 1_000_000>> {
    let len = terminated_len(command)?;
    let us = command[..len].iter().try_fold(0u32, |acc, p| {
        acc.checked_add(p.on_us as u32 + p.off_us as u32)
    })?;
    Some(us.micros())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BufferError {
    Full,
    /// The command already ends, nothing can follow the terminator
    Terminated,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Full => f.write_str("command buffer is full"),
            BufferError::Terminated => f.write_str("command already terminated"),
        }
    }
}

/// Command table with fixed capacity, built pulse by pulse.
#[derive(Clone, Default)]
pub struct CommandBuffer<const N: usize> {
    pulses: heapless::Vec<Pulse, N>,
}

impl<const N: usize> CommandBuffer<N> {
    pub fn new() -> Self {
        Self {
            pulses: heapless::Vec::new(),
        }
    }

    pub fn push(&mut self, on_us: u16, off_us: u16) -> Result<(), BufferError> {
        if self.is_terminated() {
            return Err(BufferError::Terminated);
        }
        self.pulses
            .push(Pulse::new(on_us, off_us))
            .map_err(|_| BufferError::Full)
    }

    pub fn is_terminated(&self) -> bool {
        self.pulses.last().map_or(false, Pulse::is_terminator)
    }

    pub fn clear(&mut self) {
        self.pulses.clear();
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub fn as_slice(&self) -> &[Pulse] {
        &self.pulses
    }
}
