//! Fixed-layout binary fields.
//!
//! Everything is written in the native byte order of the writing machine. A reader is told once,
//! up front, whether the data came from a machine of the opposite byte order; if so every
//! multi-byte field is reversed as it is read. Variable length data (strings, arrays) is
//! prefixed with a `u64` count.
//!
//! The [`Decoder`] also offers a skip path that consumes fields without building values, so that
//! large headers can be stepped over cheaply.

mod errors;

use std::io::{self, Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

pub use errors::CodecError;

use crate::Result;

#[cfg(target_endian = "little")]
type SwappedEndian = byteorder::BigEndian;
#[cfg(target_endian = "big")]
type SwappedEndian = byteorder::LittleEndian;

macro_rules! read_fixed {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads one `", stringify!($ty), "`, byte-swapping if required.")]
            pub fn $name(&mut self) -> Result<$ty> {
                let value = if self.swap_bytes {
                    self.reader.$name::<SwappedEndian>()
                } else {
                    self.reader.$name::<NativeEndian>()
                };
                Ok(value.map_err(CodecError::from)?)
            }
        )*
    };
}

macro_rules! write_fixed {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Writes one `", stringify!($ty), "` in native byte order.")]
            pub fn $name(&mut self, value: $ty) -> Result<()> {
                self.writer
                    .$name::<NativeEndian>(value)
                    .map_err(CodecError::from)?;
                Ok(())
            }
        )*
    };
}

/// Reads fixed-layout fields from a byte stream.
#[derive(Debug)]
pub struct Decoder<R> {
    reader: R,
    swap_bytes: bool,
}

impl<R: Read> Decoder<R> {
    /// Wraps `reader`. `swap_bytes` is true when the data was written on a machine whose byte
    /// order differs from this one.
    pub fn new(reader: R, swap_bytes: bool) -> Self {
        Self { reader, swap_bytes }
    }

    pub fn swap_bytes(&self) -> bool {
        self.swap_bytes
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.reader.read_u8().map_err(CodecError::from)?)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.reader.read_i8().map_err(CodecError::from)?)
    }

    read_fixed! {
        read_u16 => u16,
        read_i16 => i16,
        read_u32 => u32,
        read_i32 => i32,
        read_u64 => u64,
        read_i64 => i64,
        read_f32 => f32,
        read_f64 => f64,
    }

    /// Reads a length prefix.
    pub fn read_len(&mut self) -> Result<u64> {
        self.read_u64()
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// The length is never trusted for allocation: only the bytes actually present are buffered,
    /// and a stream that ends early is reported as a truncation.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_len()?;
        let mut bytes = Vec::new();
        (&mut self.reader)
            .take(len)
            .read_to_end(&mut bytes)
            .map_err(CodecError::from)?;
        if (bytes.len() as u64) < len {
            return Err(truncated(len, bytes.len() as u64).into());
        }
        String::from_utf8(bytes).map_err(|err| {
            CodecError::InvalidString {
                reason: err.to_string(),
            }
            .into()
        })
    }

    /// Consumes `n` bytes without keeping them.
    pub fn skip_bytes(&mut self, n: u64) -> Result<()> {
        let copied = io::copy(&mut (&mut self.reader).take(n), &mut io::sink())
            .map_err(CodecError::from)?;
        if copied < n {
            return Err(truncated(n, copied).into());
        }
        Ok(())
    }

    /// Consumes a length-prefixed string without decoding it.
    pub fn skip_string(&mut self) -> Result<()> {
        let len = self.read_len()?;
        self.skip_bytes(len)
    }

    /// Consumes a counted array of fixed-size elements.
    pub fn skip_array(&mut self, element_size: u64) -> Result<()> {
        let count = self.read_len()?;
        let total = count.checked_mul(element_size).ok_or_else(|| CodecError::OutOfRange {
            field: "array length",
            reason: format!("{count} elements of {element_size} bytes"),
        })?;
        self.skip_bytes(total)
    }
}

fn truncated(wanted: u64, got: u64) -> CodecError {
    CodecError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("expected {wanted} bytes, stream ended after {got}"),
    ))
}

/// Writes fixed-layout fields in native byte order.
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.writer.write_u8(value).map_err(CodecError::from)?;
        Ok(())
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.writer.write_i8(value).map_err(CodecError::from)?;
        Ok(())
    }

    write_fixed! {
        write_u16 => u16,
        write_i16 => i16,
        write_u32 => u32,
        write_i32 => i32,
        write_u64 => u64,
        write_i64 => i64,
        write_f32 => f32,
        write_f64 => f64,
    }

    /// Writes a length prefix.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_u64(len as u64)
    }

    /// Writes a length-prefixed string.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_len(value.len())?;
        self.writer
            .write_all(value.as_bytes())
            .map_err(CodecError::from)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(CodecError::from)?;
        Ok(())
    }
}
