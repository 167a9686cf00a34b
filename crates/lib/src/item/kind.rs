use std::fmt;

use serde::Serialize;

use crate::codec::CodecError;

/// The type tag of an item. The numeric values are the on-disk tags and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Kind {
    Directory = 0,
    I8 = 1,
    U8 = 2,
    I16 = 3,
    U16 = 4,
    I32 = 5,
    U32 = 6,
    I64 = 7,
    U64 = 8,
    F32 = 9,
    F64 = 10,
    Str = 11,
    Bool = 12,
    Date = 13,
    Time = 14,
    F32Array = 15,
    F64Array = 16,
}

impl Kind {
    pub const ALL: [Kind; 17] = [
        Kind::Directory,
        Kind::I8,
        Kind::U8,
        Kind::I16,
        Kind::U16,
        Kind::I32,
        Kind::U32,
        Kind::I64,
        Kind::U64,
        Kind::F32,
        Kind::F64,
        Kind::Str,
        Kind::Bool,
        Kind::Date,
        Kind::Time,
        Kind::F32Array,
        Kind::F64Array,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Payload size in bytes for kinds with a fixed layout, `None` for counted data.
    pub fn fixed_size(self) -> Option<u64> {
        match self {
            Kind::Directory => Some(0),
            Kind::I8 | Kind::U8 | Kind::Bool => Some(1),
            Kind::I16 | Kind::U16 => Some(2),
            Kind::I32 | Kind::U32 | Kind::F32 => Some(4),
            Kind::I64 | Kind::U64 | Kind::F64 | Kind::Date => Some(8),
            Kind::Time => Some(16),
            Kind::Str | Kind::F32Array | Kind::F64Array => None,
        }
    }

    /// Lower-case name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Kind::Directory => "directory",
            Kind::I8 => "i8",
            Kind::U8 => "u8",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Str => "str",
            Kind::Bool => "bool",
            Kind::Date => "date",
            Kind::Time => "time",
            Kind::F32Array => "f32array",
            Kind::F64Array => "f64array",
        }
    }
}

impl TryFrom<u8> for Kind {
    type Error = CodecError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Kind::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(CodecError::UnknownTag { tag })
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| format!("unknown item kind '{s}'"))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
