use std::cmp::Ordering;

use super::SEPARATOR;

/// An item name as stored in the header map.
///
/// Names compare byte by byte except that the separator ranks below every other byte, which is
/// plain lexicographic order over the path components. Under this order a directory is followed
/// immediately by all of its members (`A`, `A.x`, `A.x.y`, `A-b`), so every sub-tree is one
/// contiguous run of the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Key(String);

impl Key {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

fn rank(byte: u8) -> u16 {
    if byte == SEPARATOR as u8 {
        0
    } else {
        u16::from(byte) + 1
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.bytes().map(rank).cmp(other.0.bytes().map(rank))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key(name)
    }
}
