//! Indented text rendering of a header.
//!
//! Each entry is one line: the last name component, indented by [`INDENT`] spaces per level
//! below the printed root, then ` = value` unless the entry is a directory.
//!
//! ```text
//! Position
//!    Dec = -28
//!    RA = 21
//! Record = 23
//! ```

use std::{fmt, io::Write};

use super::{Header, SEPARATOR};
use crate::{Result, item::Item};

/// Spaces of indentation per directory level.
pub const INDENT: usize = 3;

fn depth(name: &str) -> usize {
    name.matches(SEPARATOR).count()
}

fn last_component(name: &str) -> &str {
    name.rsplit(SEPARATOR).next().unwrap_or(name)
}

fn push_value(text: &mut String, item: &Item) {
    if !item.is_dir() {
        text.push_str(" = ");
        text.push_str(&item.to_string());
    }
}

impl Header {
    /// Writes the header, or the sub-tree rooted at `name`, as indented text.
    ///
    /// An empty `name` prints everything. Otherwise the first line carries the full name of the
    /// root (preceded by a blank line when it is a directory) and its members follow, indented
    /// relative to it. Entries more than `max_depth` levels below the root are left out; `None`
    /// prints every level.
    ///
    /// # Errors
    /// `NotFound` if `name` is given but not stored; otherwise only I/O failures of `out`.
    pub fn print(&self, out: &mut impl Write, name: &str, max_depth: Option<usize>) -> Result<()> {
        let text = self.render(name, max_depth)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn render(&self, name: &str, max_depth: Option<usize>) -> Result<String> {
        let mut text = String::new();
        let within = |level: usize| max_depth.is_none_or(|max| level <= max);

        if name.is_empty() {
            for (entry, item) in self.iter() {
                let level = depth(entry);
                if within(level) {
                    push_line(&mut text, level, last_component(entry), item);
                }
            }
            return Ok(text);
        }

        let root = self.get(name)?;
        if root.is_dir() {
            text.push('\n');
        }
        text.push_str(name);
        push_value(&mut text, root);
        text.push('\n');

        let base = depth(name);
        for (entry, item) in self.range_in_directory(name).skip(1) {
            let level = depth(entry) - base;
            if within(level) {
                push_line(&mut text, level, last_component(entry), item);
            }
        }
        Ok(text)
    }
}

fn push_line(text: &mut String, level: usize, label: &str, item: &Item) {
    text.extend(std::iter::repeat_n(' ', INDENT * level));
    text.push_str(label);
    push_value(text, item);
    text.push('\n');
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render("", None).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
