//!
//! astrosubs: a small astronomy utility toolkit.
//!
//! The centre of the crate is a typed, hierarchical, self-describing header store with a
//! compact binary encoding. Around it sit calendar date/time types and a handful of small
//! data tools used by the `astrosubs` command-line program.
//!
//! ## Core Concepts
//!
//! * **Items (`item::Item`)**: A typed value (`item::Value`) plus an optional comment. The set of
//!   value kinds is closed: integers of every width, floats, strings, booleans, dates, times,
//!   float arrays and the directory marker.
//! * **Headers (`header::Header`)**: An ordered map from dotted names such as `Position.RA` to
//!   items. Directory-marker items authorise child names; sub-trees are contiguous in the
//!   ordering, so directory operations are range scans over a flat map.
//! * **Codec (`codec`)**: Fixed-layout native-endian binary fields with a byte-swapping read path
//!   and a skip path that walks past data without materialising it.
//! * **Header files (`file`)**: A magic number followed by a header; the magic number decides
//!   whether a reader must swap bytes.
//! * **Time (`time::Date`, `time::Time`)**: UTC calendar dates and times with MJD conversion.
//!
//! ```
//! use astrosubs::{Item, header::Header};
//!
//! let mut head = Header::new();
//! head.set("Record", Item::with_comment(23i32, "Record number"))?;
//! head.set_auto("Position.RA", Item::with_comment(21.0, "Right ascension"))?;
//! head.set_auto("Position.Dec", Item::with_comment(-28.0, "Declination"))?;
//!
//! assert!(head.get("Position")?.is_dir());
//! assert_eq!(head.get_as::<f64>("Position.RA")?, 21.0);
//! # Ok::<(), astrosubs::Error>(())
//! ```

pub mod codec;
pub mod file;
pub mod header;
pub mod interp;
pub mod item;
pub mod time;

pub use header::Header;
pub use item::{Item, Kind, Value};

/// Result type used throughout the astrosubs library.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of every error the library reports.
///
/// Callers branch on the kind; the `Display` text of [`Error`] carries the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    MissingDirectory,
    AlreadyExists,
    SelfContainment,
    NotFound,
    DirectoryNotEmpty,
    TypeMismatch,
    InvalidValue,
    CorruptData,
    IoFailure,
    InvalidPattern,
    InvalidTime,
    Interpolation,
}

/// Common error type for the astrosubs library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured errors from the header store
    #[error(transparent)]
    Header(header::HeaderError),

    /// Structured errors from item values
    #[error(transparent)]
    Item(item::ItemError),

    /// Structured errors from the binary codec
    #[error(transparent)]
    Codec(codec::CodecError),

    /// Structured errors from date and time handling
    #[error(transparent)]
    Time(time::TimeError),

    /// Structured errors from interpolation
    #[error(transparent)]
    Interp(interp::InterpError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Header(_) => "header",
            Error::Item(_) => "item",
            Error::Codec(_) => "codec",
            Error::Time(_) => "time",
            Error::Interp(_) => "interp",
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::IoFailure,
            Error::Header(err) => err.kind(),
            Error::Item(err) => err.kind(),
            Error::Codec(err) => {
                if err.is_io_error() {
                    ErrorKind::IoFailure
                } else {
                    ErrorKind::CorruptData
                }
            }
            Error::Time(_) => ErrorKind::InvalidTime,
            Error::Interp(_) => ErrorKind::Interpolation,
        }
    }

    /// Check if this error indicates an item was not found.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::TypeMismatch
    }

    /// Check if this error indicates malformed binary data.
    pub fn is_corrupt_data(&self) -> bool {
        self.kind() == ErrorKind::CorruptData
    }

    /// Check if this error is I/O related, including truncated input.
    pub fn is_io_error(&self) -> bool {
        self.kind() == ErrorKind::IoFailure
    }

    /// Check if this error was caused by a rejected item name.
    pub fn is_name_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidName | ErrorKind::MissingDirectory | ErrorKind::SelfContainment
        )
    }
}
