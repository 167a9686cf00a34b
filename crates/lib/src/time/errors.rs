//! Error types for calendar dates and times.

use thiserror::Error;

/// Failures while constructing or parsing dates and times.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    /// A day/month/year combination that does not exist
    #[error("invalid date: {reason}")]
    InvalidDate { reason: String },

    /// A fractional hour outside [0, 24)
    #[error("hour {hour} is out of range 0 to <24")]
    HourOutOfRange { hour: f64 },

    /// An hour, minute or second field outside its range
    #[error("invalid time of day: {reason}")]
    InvalidClock { reason: String },

    /// Text that could not be read as a date or time
    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },
}

impl TimeError {
    /// Check if this error came from reading text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TimeError::Parse { .. })
    }

    /// Check if this error reports a value outside its legal range.
    pub fn is_range_error(&self) -> bool {
        !self.is_parse_error()
    }
}

impl From<TimeError> for crate::Error {
    fn from(err: TimeError) -> Self {
        crate::Error::Time(err)
    }
}
