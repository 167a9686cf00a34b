//! The closed set of values an item can hold.

use std::{
    fmt,
    io::{Read, Write},
};

use serde::Serialize;

use super::{ItemError, Kind};
use crate::{
    Result,
    codec::{CodecError, Decoder, Encoder},
    time::{Date, Time},
};

/// Largest number of array elements reserved before any are read.
const MAX_PREALLOC: u64 = 1 << 16;

/// A value stored in a header item.
///
/// The variant is the item's kind; [`Value::Directory`] carries nothing and exists only to
/// authorise child names.
///
/// ```
/// # use astrosubs::item::{Kind, Value};
/// let ra = Value::from(21.0);
/// assert_eq!(ra.kind(), Kind::F64);
/// assert_eq!(ra.to_string(), "21");
/// assert_eq!(f64::try_from(&ra).unwrap(), 21.0);
/// assert!(i32::try_from(&ra).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Directory,
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bool(bool),
    Date(Date),
    Time(Time),
    F32Array(Vec<f32>),
    F64Array(Vec<f64>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Directory => Kind::Directory,
            Value::I8(_) => Kind::I8,
            Value::U8(_) => Kind::U8,
            Value::I16(_) => Kind::I16,
            Value::U16(_) => Kind::U16,
            Value::I32(_) => Kind::I32,
            Value::U32(_) => Kind::U32,
            Value::I64(_) => Kind::I64,
            Value::U64(_) => Kind::U64,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Str(_) => Kind::Str,
            Value::Bool(_) => Kind::Bool,
            Value::Date(_) => Kind::Date,
            Value::Time(_) => Kind::Time,
            Value::F32Array(_) => Kind::F32Array,
            Value::F64Array(_) => Kind::F64Array,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Value::Directory)
    }

    /// Widens any integer kind that fits into an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I8(v) => Some(v.into()),
            Value::U8(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::I64(v) => Some(v),
            Value::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Widens either float kind to an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(v.into()),
            Value::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Reads `text` as a value of `kind`.
    ///
    /// Arrays are written as comma or whitespace separated numbers; the directory kind ignores
    /// the text. Strings are taken verbatim, surrounding whitespace included.
    pub fn parse(kind: Kind, text: &str) -> Result<Value> {
        let invalid = || ItemError::InvalidLiteral {
            kind,
            input: text.to_string(),
        };
        let trimmed = text.trim();
        let value = match kind {
            Kind::Directory => Value::Directory,
            Kind::I8 => Value::I8(trimmed.parse().map_err(|_| invalid())?),
            Kind::U8 => Value::U8(trimmed.parse().map_err(|_| invalid())?),
            Kind::I16 => Value::I16(trimmed.parse().map_err(|_| invalid())?),
            Kind::U16 => Value::U16(trimmed.parse().map_err(|_| invalid())?),
            Kind::I32 => Value::I32(trimmed.parse().map_err(|_| invalid())?),
            Kind::U32 => Value::U32(trimmed.parse().map_err(|_| invalid())?),
            Kind::I64 => Value::I64(trimmed.parse().map_err(|_| invalid())?),
            Kind::U64 => Value::U64(trimmed.parse().map_err(|_| invalid())?),
            Kind::F32 => Value::F32(trimmed.parse().map_err(|_| invalid())?),
            Kind::F64 => Value::F64(trimmed.parse().map_err(|_| invalid())?),
            Kind::Str => Value::Str(text.to_string()),
            Kind::Bool => Value::Bool(trimmed.parse().map_err(|_| invalid())?),
            Kind::Date => Value::Date(trimmed.parse()?),
            Kind::Time => Value::Time(trimmed.parse()?),
            Kind::F32Array => Value::F32Array(
                split_list(trimmed)
                    .map(str::parse)
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|_| invalid())?,
            ),
            Kind::F64Array => Value::F64Array(
                split_list(trimmed)
                    .map(str::parse)
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|_| invalid())?,
            ),
        };
        Ok(value)
    }

    pub(crate) fn encode_payload<W: Write>(&self, enc: &mut Encoder<W>) -> Result<()> {
        match self {
            Value::Directory => Ok(()),
            Value::I8(v) => enc.write_i8(*v),
            Value::U8(v) => enc.write_u8(*v),
            Value::I16(v) => enc.write_i16(*v),
            Value::U16(v) => enc.write_u16(*v),
            Value::I32(v) => enc.write_i32(*v),
            Value::U32(v) => enc.write_u32(*v),
            Value::I64(v) => enc.write_i64(*v),
            Value::U64(v) => enc.write_u64(*v),
            Value::F32(v) => enc.write_f32(*v),
            Value::F64(v) => enc.write_f64(*v),
            Value::Str(s) => enc.write_string(s),
            Value::Bool(b) => enc.write_u8(u8::from(*b)),
            Value::Date(d) => enc.write_i64(d.mjd()),
            Value::Time(t) => {
                enc.write_i64(t.date().mjd())?;
                enc.write_f64(t.hour())
            }
            Value::F32Array(values) => {
                enc.write_len(values.len())?;
                values.iter().try_for_each(|v| enc.write_f32(*v))
            }
            Value::F64Array(values) => {
                enc.write_len(values.len())?;
                values.iter().try_for_each(|v| enc.write_f64(*v))
            }
        }
    }

    pub(crate) fn decode_payload<R: Read>(kind: Kind, dec: &mut Decoder<R>) -> Result<Value> {
        let value = match kind {
            Kind::Directory => Value::Directory,
            Kind::I8 => Value::I8(dec.read_i8()?),
            Kind::U8 => Value::U8(dec.read_u8()?),
            Kind::I16 => Value::I16(dec.read_i16()?),
            Kind::U16 => Value::U16(dec.read_u16()?),
            Kind::I32 => Value::I32(dec.read_i32()?),
            Kind::U32 => Value::U32(dec.read_u32()?),
            Kind::I64 => Value::I64(dec.read_i64()?),
            Kind::U64 => Value::U64(dec.read_u64()?),
            Kind::F32 => Value::F32(dec.read_f32()?),
            Kind::F64 => Value::F64(dec.read_f64()?),
            Kind::Str => Value::Str(dec.read_string()?),
            Kind::Bool => Value::Bool(dec.read_u8()? != 0),
            Kind::Date => Value::Date(decode_date(dec.read_i64()?)?),
            Kind::Time => {
                let date = decode_date(dec.read_i64()?)?;
                let hour = dec.read_f64()?;
                let time = Time::new(date, hour).map_err(|err| CodecError::OutOfRange {
                    field: "hour of day",
                    reason: err.to_string(),
                })?;
                Value::Time(time)
            }
            Kind::F32Array => {
                let count = dec.read_len()?;
                let mut values = Vec::with_capacity(count.min(MAX_PREALLOC) as usize);
                for _ in 0..count {
                    values.push(dec.read_f32()?);
                }
                Value::F32Array(values)
            }
            Kind::F64Array => {
                let count = dec.read_len()?;
                let mut values = Vec::with_capacity(count.min(MAX_PREALLOC) as usize);
                for _ in 0..count {
                    values.push(dec.read_f64()?);
                }
                Value::F64Array(values)
            }
        };
        Ok(value)
    }

    pub(crate) fn skip_payload<R: Read>(kind: Kind, dec: &mut Decoder<R>) -> Result<()> {
        match kind {
            Kind::Str => dec.skip_string(),
            Kind::F32Array => dec.skip_array(4),
            Kind::F64Array => dec.skip_array(8),
            fixed => dec.skip_bytes(fixed.fixed_size().unwrap_or(0)),
        }
    }
}

fn decode_date(mjd: i64) -> Result<Date> {
    Ok(Date::from_mjd(mjd).map_err(|err| CodecError::OutOfRange {
        field: "day number",
        reason: err.to_string(),
    })?)
}

fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

/// Human-readable rendering of the value alone. Directories render as nothing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Directory => Ok(()),
            Value::I8(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::F32Array(values) => write_joined(f, values),
            Value::F64Array(values) => write_joined(f, values),
        }
    }
}

/// Conversions between `Value` and the Rust type stored by each variant.
macro_rules! impl_value_conversions {
    (copy: $($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl TryFrom<&Value> for $ty {
                type Error = ItemError;

                fn try_from(value: &Value) -> std::result::Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(*v),
                        other => Err(ItemError::TypeMismatch {
                            expected: Kind::$variant,
                            actual: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
    (clone: $($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl TryFrom<&Value> for $ty {
                type Error = ItemError;

                fn try_from(value: &Value) -> std::result::Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v.clone()),
                        other => Err(ItemError::TypeMismatch {
                            expected: Kind::$variant,
                            actual: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_value_conversions!(copy:
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    Date => Date,
    Time => Time,
);

impl_value_conversions!(clone:
    String => Str,
    Vec<f32> => F32Array,
    Vec<f64> => F64Array,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ItemError;

    fn try_from(value: &'a Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(ItemError::TypeMismatch {
                expected: Kind::Str,
                actual: other.kind(),
            }),
        }
    }
}
