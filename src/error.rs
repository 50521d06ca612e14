use core::fmt;

/// Why a carrier frequency cannot be turned into tick counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierError {
    ZeroFrequency,
    /// Frequency too low: period does not fit the 8-bit compare register
    PeriodOverflow { period: u16 },
    /// Frequency too high: no room for a duty value between 0 and period
    PeriodTooShort { period: u16 },
}

impl fmt::Display for CarrierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierError::ZeroFrequency => f.write_str("carrier frequency is zero"),
            CarrierError::PeriodOverflow { period } => {
                write!(f, "carrier period {} ticks exceeds 8-bit register", period)
            }
            CarrierError::PeriodTooShort { period } => {
                write!(f, "carrier period {} ticks leaves no duty cycle", period)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Output pin error
    Pin(E),
    Carrier(CarrierError),
    /// `send_command` called before `initialise`
    NotInitialised,
    /// Command table has no pulse with a zero OFF time
    Unterminated,
}

impl<E> From<CarrierError> for Error<E> {
    fn from(e: CarrierError) -> Self {
        Error::Carrier(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "output pin error: {:?}", e),
            Error::Carrier(e) => write!(f, "{}", e),
            Error::NotInitialised => f.write_str("carrier not initialised"),
            Error::Unterminated => f.write_str("command has no terminating pulse"),
        }
    }
}
