//! Name searches over a [`Header`].
//!
//! Each `find_*` method scans from the start of the header; its `find_next_*` twin scans from
//! a cursor, so a caller can walk every match by feeding back the last name found with
//! [`Bound::Excluded`]:
//!
//! ```
//! use std::ops::Bound;
//! use astrosubs::{Item, header::Header};
//!
//! let mut head = Header::new();
//! head.set_auto("Blue.Exposure", Item::new(10.0))?;
//! head.set_auto("Red.Exposure", Item::new(30.0))?;
//!
//! let mut found = Vec::new();
//! let mut cursor = Bound::Unbounded;
//! while let Some((name, _)) = head.find_next_ending_with("Exposure", cursor) {
//!     found.push(name);
//!     cursor = Bound::Excluded(name);
//! }
//! assert_eq!(found, vec!["Blue.Exposure", "Red.Exposure"]);
//! # Ok::<(), astrosubs::Error>(())
//! ```

use std::ops::Bound;

use regex::Regex;

use super::{Entry, Header, HeaderError, key::Key};
use crate::Result;

/// Outcome of [`Header::regex_find`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegexMatch<'a> {
    /// No name matched.
    None,
    /// Exactly one name matched.
    Unique(Entry<'a>),
    /// More than one name matched; this is the first in stored order.
    Ambiguous(Entry<'a>),
}

impl<'a> RegexMatch<'a> {
    /// The unique match, if there was exactly one.
    pub fn unique(self) -> Option<Entry<'a>> {
        match self {
            RegexMatch::Unique(entry) => Some(entry),
            _ => None,
        }
    }

    /// The first match, unique or not.
    pub fn first(self) -> Option<Entry<'a>> {
        match self {
            RegexMatch::None => None,
            RegexMatch::Unique(entry) | RegexMatch::Ambiguous(entry) => Some(entry),
        }
    }
}

impl Header {
    /// Entries from the cursor onward, in stored order.
    fn entries_from<'a>(&'a self, from: Bound<&str>) -> impl Iterator<Item = Entry<'a>> + use<'a> {
        let lower = from.map(Key::from);
        self.items
            .range((lower, Bound::Unbounded))
            .map(|(key, item)| (key.as_str(), item))
    }

    /// First entry whose name starts with `prefix`.
    pub fn find_starting_with(&self, prefix: &str) -> Option<Entry<'_>> {
        self.find_next_starting_with(prefix, Bound::Unbounded)
    }

    pub fn find_next_starting_with<'a>(
        &'a self,
        prefix: &str,
        from: Bound<&str>,
    ) -> Option<Entry<'a>> {
        self.entries_from(from)
            .find(|(name, _)| name.starts_with(prefix))
    }

    /// First entry that is `directory` or lies beneath it.
    ///
    /// Unlike [`Header::find_starting_with`], `A` does not match `AB`.
    pub fn find_starting_with_dir(&self, directory: &str) -> Option<Entry<'_>> {
        self.find_next_starting_with_dir(directory, Bound::Unbounded)
    }

    pub fn find_next_starting_with_dir<'a>(
        &'a self,
        directory: &str,
        from: Bound<&str>,
    ) -> Option<Entry<'a>> {
        self.entries_from(from)
            .find(|(name, _)| Header::is_member_of_directory(name, directory))
    }

    /// First entry whose name ends with `suffix`.
    pub fn find_ending_with(&self, suffix: &str) -> Option<Entry<'_>> {
        self.find_next_ending_with(suffix, Bound::Unbounded)
    }

    pub fn find_next_ending_with<'a>(
        &'a self,
        suffix: &str,
        from: Bound<&str>,
    ) -> Option<Entry<'a>> {
        self.entries_from(from)
            .find(|(name, _)| name.ends_with(suffix))
    }

    /// First entry whose name contains `fragment`.
    pub fn find_containing(&self, fragment: &str) -> Option<Entry<'_>> {
        self.find_next_containing(fragment, Bound::Unbounded)
    }

    pub fn find_next_containing<'a>(
        &'a self,
        fragment: &str,
        from: Bound<&str>,
    ) -> Option<Entry<'a>> {
        self.entries_from(from)
            .find(|(name, _)| name.contains(fragment))
    }

    /// Matches item names against a regular expression.
    ///
    /// The pattern is unanchored: `RA` matches `Position.RA`. Use `^` and `$` for whole names.
    ///
    /// # Errors
    /// `InvalidPattern` if `pattern` does not compile.
    pub fn regex_find(&self, pattern: &str) -> Result<RegexMatch<'_>> {
        let regex = Regex::new(pattern).map_err(|err| HeaderError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;
        let mut matches = self.iter().filter(|(name, _)| regex.is_match(name));
        let found = match (matches.next(), matches.next()) {
            (None, _) => RegexMatch::None,
            (Some(entry), None) => RegexMatch::Unique(entry),
            (Some(entry), Some(_)) => RegexMatch::Ambiguous(entry),
        };
        tracing::trace!(pattern, ?found, "Searched header names");
        Ok(found)
    }
}
