use crate::time::InvalidTime;
use std::fmt;

/// Errors that can occur in the itinerary crate.
///
/// Incomplete data is never an error here; open slots are ordinary
/// values the audit engine reports as findings. Errors only arise at
/// the input boundary, when raw operator text fails to parse.
#[derive(Debug)]
pub enum Error {
    /// A string failed to parse as a clock time.
    InvalidTime(InvalidTime),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTime(e) => write!(f, "Invalid schedule input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidTime> for Error {
    fn from(e: InvalidTime) -> Self {
        Error::InvalidTime(e)
    }
}
