//! Error types for item values.

use thiserror::Error;

use super::Kind;
use crate::ErrorKind;

/// Failures when reading or replacing the value held by an item.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The value is not of the requested (or required) kind
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: Kind, actual: Kind },

    /// Text that cannot be read as a value of the given kind
    #[error("cannot read '{input}' as {kind}")]
    InvalidLiteral { kind: Kind, input: String },
}

impl ItemError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ItemError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ItemError::InvalidLiteral { .. } => ErrorKind::InvalidValue,
        }
    }

    /// Check if this error is a kind mismatch.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ItemError::TypeMismatch { .. })
    }

    /// The kind that was found, for a mismatch.
    pub fn actual(&self) -> Option<Kind> {
        match self {
            ItemError::TypeMismatch { actual, .. } => Some(*actual),
            ItemError::InvalidLiteral { .. } => None,
        }
    }
}

impl From<ItemError> for crate::Error {
    fn from(err: ItemError) -> Self {
        crate::Error::Item(err)
    }
}
