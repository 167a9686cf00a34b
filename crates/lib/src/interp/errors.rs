//! Error types for tabulated-data interpolation.

use thiserror::Error;

/// Failures while loading a table or interpolating from it.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum InterpError {
    /// Fewer than two tabulated points
    #[error("need at least 2 points to interpolate, have {count}")]
    TooFewPoints { count: usize },

    /// X and Y columns of different lengths
    #[error("{x_len} X values but {y_len} Y values")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// X values that are not strictly increasing or strictly decreasing
    #[error("X values are not strictly monotonic at index {index}")]
    NotMonotonic { index: usize },

    /// A point outside the tabulated X range
    #[error("trying to interpolate out of range of input data: value = {x}")]
    OutOfRange { x: f64 },

    /// An output grid with fewer than two points
    #[error("output grid needs at least 2 points, asked for {nx}")]
    GridTooSmall { nx: usize },

    /// A table line that is not two numbers
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl InterpError {
    /// Check if this error was raised for a point outside the table.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, InterpError::OutOfRange { .. })
    }

    /// Check if this error came from reading table text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, InterpError::Parse { .. })
    }
}

impl From<InterpError> for crate::Error {
    fn from(err: InterpError) -> Self {
        crate::Error::Interp(err)
    }
}
