//! Error types for the binary codec.

use thiserror::Error;

/// Failures while reading or writing binary header data.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying reader or writer failed, including short reads
    #[error("codec I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// An item type tag that no known kind uses
    #[error("unrecognised item type tag {tag}")]
    UnknownTag { tag: u8 },

    /// A length-prefixed string that is not valid UTF-8
    #[error("invalid string data: {reason}")]
    InvalidString { reason: String },

    /// A field whose decoded value lies outside its legal range
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// A decoded entry the header store refused (bad name, missing directory, duplicate)
    #[error("invalid entry [{name}]: {reason}")]
    InvalidEntry { name: String, reason: String },

    /// A file that does not start with the header magic number
    #[error("bad magic number {found:#010x}")]
    BadMagic { found: u32 },
}

impl CodecError {
    /// Check if this error came from the underlying stream.
    pub fn is_io_error(&self) -> bool {
        matches!(self, CodecError::Io(_))
    }

    /// Check if the stream ended before a field was complete.
    pub fn is_truncated(&self) -> bool {
        match self {
            CodecError::Io(err) => err.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }

    /// Check if this error reports malformed (rather than missing) data.
    pub fn is_corrupt(&self) -> bool {
        !self.is_io_error()
    }
}

impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
