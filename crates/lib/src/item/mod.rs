//! Header items: a typed value plus an optional comment.
//!
//! An item's kind is fixed when it is built. [`Item::set_value`] only accepts a value of the
//! same kind, so a header entry never silently changes type.
//!
//! # Binary layout
//!
//! ```text
//! item := tag:u8 payload comment:(len:u64 bytes)
//! ```
//!
//! The payload layout is fixed per [`Kind`]; see [`Kind::fixed_size`] and the `codec` module.

mod errors;
mod kind;
mod value;

use std::{
    fmt,
    io::{Read, Write},
};

use serde::Serialize;

pub use errors::ItemError;
pub use kind::Kind;
pub use value::Value;

use crate::{
    Result,
    codec::{Decoder, Encoder},
};

/// A value stored in a header, with a human-readable comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    #[serde(flatten)]
    value: Value,
    #[serde(skip_serializing_if = "String::is_empty")]
    comment: String,
}

impl Item {
    /// Creates an item with no comment.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            comment: String::new(),
        }
    }

    /// Creates an item with a comment.
    pub fn with_comment(value: impl Into<Value>, comment: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: comment.into(),
        }
    }

    /// Creates a directory marker.
    pub fn directory(comment: impl Into<String>) -> Self {
        Self::with_comment(Value::Directory, comment)
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn is_dir(&self) -> bool {
        self.value.is_dir()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The comment, or `None` when it is empty.
    pub fn comment(&self) -> Option<&str> {
        (!self.comment.is_empty()).then_some(self.comment.as_str())
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Replaces the value, keeping the kind.
    ///
    /// # Errors
    /// Returns a type mismatch if `value` is of a different kind; the item is left unchanged.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.kind() != self.kind() {
            return Err(ItemError::TypeMismatch {
                expected: self.kind(),
                actual: value.kind(),
            }
            .into());
        }
        self.value = value;
        Ok(())
    }

    /// Reads the value as `T`.
    ///
    /// ```
    /// # use astrosubs::Item;
    /// let item = Item::with_comment(500.0f32, "Exposure time (seconds)");
    /// assert_eq!(item.get::<f32>()?, 500.0);
    /// assert!(item.get::<f64>().is_err());
    /// # Ok::<(), astrosubs::Error>(())
    /// ```
    pub fn get<'a, T>(&'a self) -> Result<T>
    where
        T: TryFrom<&'a Value, Error = ItemError>,
    {
        Ok(T::try_from(&self.value)?)
    }

    /// Writes the rendered value (not the comment) to `out`.
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", self.value)?;
        Ok(())
    }

    /// Writes the item in binary form.
    pub fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> Result<()> {
        enc.write_u8(self.kind().tag())?;
        self.value.encode_payload(enc)?;
        enc.write_string(&self.comment)
    }

    /// Reads one item in binary form.
    ///
    /// # Errors
    /// An unknown type tag or malformed payload is corrupt data; a stream that ends early is an
    /// I/O failure.
    pub fn decode<R: Read>(dec: &mut Decoder<R>) -> Result<Item> {
        let kind = Kind::try_from(dec.read_u8()?)?;
        let value = Value::decode_payload(kind, dec)?;
        let comment = dec.read_string()?;
        Ok(Item { value, comment })
    }

    /// Steps over one binary item without building it.
    pub fn skip<R: Read>(dec: &mut Decoder<R>) -> Result<()> {
        let kind = Kind::try_from(dec.read_u8()?)?;
        Value::skip_payload(kind, dec)?;
        dec.skip_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
