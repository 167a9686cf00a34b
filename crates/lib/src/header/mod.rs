//! The hierarchical header store.
//!
//! A [`Header`] maps dotted names such as `Position.RA` to [`Item`]s. Every name component
//! except the last must name an existing directory-marker item, so `Position.RA` can only be
//! stored once `Position` holds a directory. Names are kept in an order where the separator
//! sorts before every other byte; under that order a directory is immediately followed by all
//! of its members, and directory-wide operations ([`Header::erase`], [`Header::rename`],
//! [`Header::range_in_directory`]) work on one contiguous run of entries.
//!
//! ```
//! use astrosubs::{Item, header::Header};
//!
//! let mut head = Header::new();
//! head.set("Object", Item::directory("Target information"))?;
//! head.set("Object.Name", Item::with_comment("IP Peg", "Target name"))?;
//! head.set("Object.Period", Item::with_comment(0.158_206_16, "Orbital period (days)"))?;
//!
//! head.rename("Object", "Target")?;
//! assert_eq!(head.get_as::<String>("Target.Name")?, "IP Peg");
//! assert!(!head.contains("Object.Name"));
//! # Ok::<(), astrosubs::Error>(())
//! ```

mod binary;
mod errors;
mod key;
mod print;
mod search;

use std::collections::{BTreeMap, btree_map};

use serde::{Serialize, Serializer, ser::SerializeMap};

pub use errors::HeaderError;
pub use print::INDENT;
pub use search::RegexMatch;

use crate::{
    Result,
    item::{Item, ItemError, Value},
};
use key::Key;

/// Separates the components of an item name.
pub const SEPARATOR: char = '.';

/// Comment attached to directories created by [`Header::set_auto`].
pub const AUTO_DIRECTORY_COMMENT: &str = "Directory set automatically";

/// A borrowed view of one stored entry.
pub type Entry<'a> = (&'a str, &'a Item);

/// An ordered, hierarchical collection of named items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    items: BTreeMap<Key, Item>,
}

impl Header {
    /// Creates an empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items, directories included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&Key::from(name))
    }

    /// Iterates over all entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.items.iter().map(|(key, item)| (key.as_str(), item))
    }

    /// Iterates over all names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(Key::as_str)
    }

    /// Stores `item` under `name`, replacing any item already there.
    ///
    /// Returns the replaced item, if there was one.
    ///
    /// # Errors
    /// - `InvalidName` if `name` fails [`Header::valid_name`]
    /// - `MissingDirectory` if the parent of `name` is not a stored directory
    /// - `DirectoryNotEmpty` if `name` is a directory with members and `item` is not a directory
    pub fn set(&mut self, name: &str, item: Item) -> Result<Option<Item>> {
        if !Self::valid_name(name) {
            return Err(HeaderError::InvalidName {
                name: name.to_string(),
            }
            .into());
        }
        if !self.check_for_dir(name) {
            return Err(HeaderError::MissingDirectory {
                name: name.to_string(),
                directory: parent(name).unwrap_or_default().to_string(),
            }
            .into());
        }
        self.check_replace(name, &item)?;
        tracing::trace!(name, kind = %item.kind(), "Setting header item");
        Ok(self.items.insert(Key::from(name), item))
    }

    /// Like [`Header::set`], but first creates any missing ancestor directories.
    ///
    /// Created directories carry [`AUTO_DIRECTORY_COMMENT`].
    ///
    /// # Errors
    /// - `InvalidName` if `name` fails [`Header::valid_name`]
    /// - `MissingDirectory` if an ancestor already exists but is not a directory; nothing is
    ///   created in that case
    /// - `DirectoryNotEmpty` as for [`Header::set`]
    pub fn set_auto(&mut self, name: &str, item: Item) -> Result<Option<Item>> {
        if !Self::valid_name(name) {
            return Err(HeaderError::InvalidName {
                name: name.to_string(),
            }
            .into());
        }
        self.check_replace(name, &item)?;

        let mut missing = Vec::new();
        for directory in ancestors(name) {
            match self.items.get(&Key::from(directory)) {
                Some(existing) if existing.is_dir() => {}
                Some(_) => {
                    return Err(HeaderError::MissingDirectory {
                        name: name.to_string(),
                        directory: directory.to_string(),
                    }
                    .into());
                }
                None => missing.push(directory),
            }
        }

        for directory in missing {
            tracing::debug!(directory, "Creating directory automatically");
            self.items
                .insert(Key::from(directory), Item::directory(AUTO_DIRECTORY_COMMENT));
        }
        Ok(self.items.insert(Key::from(name), item))
    }

    /// Looks up an item.
    ///
    /// # Errors
    /// `NotFound` if no item is stored under `name`.
    pub fn get(&self, name: &str) -> Result<&Item> {
        self.items.get(&Key::from(name)).ok_or_else(|| not_found(name))
    }

    /// Looks up an item for in-place editing. The item's kind cannot change through this handle.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Item> {
        self.items
            .get_mut(&Key::from(name))
            .ok_or_else(|| not_found(name))
    }

    /// Looks up an item and reads its value as `T`.
    ///
    /// # Errors
    /// `NotFound` for a missing item, `TypeMismatch` if the stored kind is not `T`.
    pub fn get_as<'a, T>(&'a self, name: &str) -> Result<T>
    where
        T: TryFrom<&'a Value, Error = ItemError>,
    {
        self.get(name)?.get()
    }

    /// Replaces the value of an existing item, keeping its kind and comment.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.get_mut(name)?.set_value(value)
    }

    /// Removes `name` together with every member of it, if it is a directory.
    ///
    /// Returns the number of entries removed; zero when `name` is not stored.
    pub fn erase(&mut self, name: &str) -> usize {
        let doomed: Vec<Key> = self
            .range_in_directory(name)
            .map(|(member, _)| Key::from(member))
            .collect();
        for key in &doomed {
            self.items.remove(key);
        }
        if !doomed.is_empty() {
            tracing::debug!(name, removed = doomed.len(), "Erased header entries");
        }
        doomed.len()
    }

    /// Removes exactly one entry.
    ///
    /// # Errors
    /// - `NotFound` if nothing is stored under `name`
    /// - `DirectoryNotEmpty` if `name` is a directory that still has members; use
    ///   [`Header::erase`] to remove a whole sub-tree
    pub fn remove_entry(&mut self, name: &str) -> Result<Item> {
        let key = Key::from(name);
        if !self.items.contains_key(&key) {
            return Err(not_found(name));
        }
        if self.range_in_directory(name).nth(1).is_some() {
            return Err(HeaderError::DirectoryNotEmpty {
                name: name.to_string(),
            }
            .into());
        }
        self.items.remove(&key).ok_or_else(|| not_found(name))
    }

    /// Renames `old` to `new`, carrying along every member if `old` is a directory.
    ///
    /// Renaming a name to itself does nothing. All checks run before anything moves, so on
    /// error the header is unchanged.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `InvalidName` if `new` fails [`Header::valid_name`]
    /// - `MissingDirectory` if the parent of `new` is not a stored directory
    /// - `AlreadyExists` if `new` is already taken
    /// - `SelfContainment` if `new` lies inside `old`
    /// - `NotFound` if nothing is stored under `old`
    /// - `AlreadyExists` if a renamed member would land on a taken name
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new {
            return Ok(());
        }
        if !Self::valid_name(new) {
            return Err(HeaderError::InvalidName {
                name: new.to_string(),
            }
            .into());
        }
        if !self.check_for_dir(new) {
            return Err(HeaderError::MissingDirectory {
                name: new.to_string(),
                directory: parent(new).unwrap_or_default().to_string(),
            }
            .into());
        }
        if self.contains(new) {
            return Err(HeaderError::AlreadyExists {
                name: new.to_string(),
            }
            .into());
        }
        if Self::is_member_of_directory(new, old) {
            return Err(HeaderError::SelfContainment {
                from: old.to_string(),
                to: new.to_string(),
            }
            .into());
        }

        let moves: Vec<(Key, Key)> = self
            .range_in_directory(old)
            .map(|(member, _)| {
                let renamed = format!("{new}{}", &member[old.len()..]);
                (Key::from(member), Key::from(renamed))
            })
            .collect();
        if moves.is_empty() {
            return Err(not_found(old));
        }
        if let Some((_, taken)) = moves.iter().find(|(_, to)| self.items.contains_key(to)) {
            return Err(HeaderError::AlreadyExists {
                name: taken.as_str().to_string(),
            }
            .into());
        }

        let moved = moves.len();
        for (from, to) in moves {
            if let Some(item) = self.items.remove(&from) {
                self.items.insert(to, item);
            }
        }
        tracing::debug!(old, new, moved, "Renamed header entries");
        Ok(())
    }

    /// Refuses to replace a directory that still has members with a non-directory item.
    fn check_replace(&self, name: &str, item: &Item) -> Result<()> {
        if !item.is_dir() && self.range_in_directory(name).nth(1).is_some() {
            return Err(HeaderError::DirectoryNotEmpty {
                name: name.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// True if `name` could be stored now as far as directories go: it has no parent, or its
    /// parent is a stored directory.
    pub fn check_for_dir(&self, name: &str) -> bool {
        match parent(name) {
            None => true,
            Some(directory) => self
                .items
                .get(&Key::from(directory))
                .is_some_and(Item::is_dir),
        }
    }

    /// True if `name` is acceptable as an item name: non-empty, no whitespace, not starting or
    /// ending with the separator, and no empty components.
    pub fn valid_name(name: &str) -> bool {
        !name.is_empty()
            && !name.chars().any(char::is_whitespace)
            && !name.starts_with(SEPARATOR)
            && !name.ends_with(SEPARATOR)
            && !name.contains("..")
    }

    /// True if `name` is `directory` itself or lies anywhere beneath it.
    ///
    /// ```
    /// use astrosubs::header::Header;
    ///
    /// assert!(Header::is_member_of_directory("A.B.C", "A.B"));
    /// assert!(Header::is_member_of_directory("A.B", "A.B"));
    /// assert!(!Header::is_member_of_directory("A.BC", "A.B"));
    /// ```
    pub fn is_member_of_directory(name: &str, directory: &str) -> bool {
        name.strip_prefix(directory)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
    }

    /// Iterates over `directory` and all of its members, in stored order.
    ///
    /// Empty when `directory` is not stored. For a non-directory item it yields just that item.
    pub fn range_in_directory<'a>(&'a self, directory: &str) -> Range<'a> {
        Range {
            inner: self.items.range(Key::from(directory)..),
            directory: directory.to_string(),
            done: false,
        }
    }
}

/// Iterator over a directory and its members, from [`Header::range_in_directory`].
pub struct Range<'a> {
    inner: btree_map::Range<'a, Key, Item>,
    directory: String,
    done: bool,
}

impl<'a> Iterator for Range<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some((key, item)) if Header::is_member_of_directory(key.as_str(), &self.directory) => {
                Some((key.as_str(), item))
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Range<'_> {}

impl Serialize for Header {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, item) in self.iter() {
            map.serialize_entry(name, item)?;
        }
        map.end()
    }
}

/// The directory part of a name, if it has one.
fn parent(name: &str) -> Option<&str> {
    name.rsplit_once(SEPARATOR).map(|(directory, _)| directory)
}

/// Every proper ancestor of `name`, outermost first: `A.B.C` gives `A`, then `A.B`.
fn ancestors(name: &str) -> impl Iterator<Item = &str> {
    name.match_indices(SEPARATOR).map(|(at, _)| &name[..at])
}

fn not_found(name: &str) -> crate::Error {
    HeaderError::NotFound {
        name: name.to_string(),
    }
    .into()
}
