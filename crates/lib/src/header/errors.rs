//! Error types for the header store.

use thiserror::Error;

use crate::ErrorKind;

/// Structured errors from [`Header`](super::Header) operations.
///
/// Every mutating operation that returns one of these has left the header unchanged.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Empty, contains whitespace, starts or ends with the separator, or has a doubled separator
    #[error("invalid item name [{name}]")]
    InvalidName { name: String },

    /// The parent directory of a name has not been created (or is not a directory)
    #[error("no directory [{directory}] to hold [{name}]")]
    MissingDirectory { name: String, directory: String },

    /// The target of a rename is already taken
    #[error("[{name}] already exists")]
    AlreadyExists { name: String },

    /// A rename that would place an item inside itself
    #[error("cannot rename [{from}] to be a sub-element of itself [{to}]")]
    SelfContainment { from: String, to: String },

    /// No item with this name
    #[error("no such item as [{name}]")]
    NotFound { name: String },

    /// Removing or overwriting a directory that still has members
    #[error("directory [{name}] is not empty")]
    DirectoryNotEmpty { name: String },

    /// A name search pattern that is not a valid regular expression
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl HeaderError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeaderError::InvalidName { .. } => ErrorKind::InvalidName,
            HeaderError::MissingDirectory { .. } => ErrorKind::MissingDirectory,
            HeaderError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            HeaderError::SelfContainment { .. } => ErrorKind::SelfContainment,
            HeaderError::NotFound { .. } => ErrorKind::NotFound,
            HeaderError::DirectoryNotEmpty { .. } => ErrorKind::DirectoryNotEmpty,
            HeaderError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
        }
    }

    /// Check if this error indicates an item was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HeaderError::NotFound { .. })
    }

    /// Check if this error indicates a name is already taken.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, HeaderError::AlreadyExists { .. })
    }

    /// Get the item name this error is about, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            HeaderError::InvalidName { name }
            | HeaderError::MissingDirectory { name, .. }
            | HeaderError::AlreadyExists { name }
            | HeaderError::NotFound { name }
            | HeaderError::DirectoryNotEmpty { name } => Some(name),
            HeaderError::SelfContainment { to, .. } => Some(to),
            HeaderError::InvalidPattern { .. } => None,
        }
    }
}

impl From<HeaderError> for crate::Error {
    fn from(err: HeaderError) -> Self {
        crate::Error::Header(err)
    }
}
