//! Linear interpolation of monotonic tabulated data.
//!
//! A [`Table`] holds two columns with strictly increasing or strictly decreasing X values. Points
//! are bracketed with [`Table::hunt`], which checks a guess first and so costs almost nothing
//! when successive points step steadily through the table, as they do for [`Table::resample`].
//!
//! ```
//! use astrosubs::interp::Table;
//!
//! let table = Table::new(vec![0.0, 1.0, 3.0], vec![0.0, 10.0, 30.0])?;
//! assert_eq!(table.interpolate(2.0)?, 20.0);
//! assert!(table.interpolate(3.5).is_err());
//!
//! let grid = table.resample(0.0, 3.0, 4)?;
//! assert_eq!(grid[1], (1.0, 10.0));
//! # Ok::<(), astrosubs::Error>(())
//! ```

mod errors;

use std::io::BufRead;

pub use errors::InterpError;

use crate::Result;

/// Two-column monotonic data.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    x: Vec<f64>,
    y: Vec<f64>,
    ascending: bool,
}

impl Table {
    /// Builds a table from matching X and Y columns.
    ///
    /// # Errors
    /// The columns must have the same length, at least two points, and strictly monotonic X.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Table> {
        if x.len() != y.len() {
            return Err(InterpError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            }
            .into());
        }
        if x.len() < 2 {
            return Err(InterpError::TooFewPoints { count: x.len() }.into());
        }
        let ascending = x[1] > x[0];
        if let Some(index) = x.windows(2).position(|pair| {
            if ascending {
                !(pair[1] > pair[0])
            } else {
                !(pair[1] < pair[0])
            }
        }) {
            return Err(InterpError::NotMonotonic { index: index + 1 }.into());
        }
        Ok(Table { x, y, ascending })
    }

    /// Reads whitespace-separated `x y` pairs, one per line.
    ///
    /// Blank lines and lines starting with `#` are ignored; extra columns are not allowed.
    pub fn read(reader: impl BufRead) -> Result<Table> {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let (xv, yv) = parse_pair(text).map_err(|reason| InterpError::Parse {
                line: index + 1,
                reason,
            })?;
            x.push(xv);
            y.push(yv);
        }
        tracing::debug!(points = x.len(), "Read interpolation table");
        Table::new(x, y)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; a table has at least two points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Finds `j` with `x` between `x[j - 1]` and `x[j]`, trying `guess` and the interval after
    /// it before falling back to a binary search.
    ///
    /// Returns `None` when `x` lies outside the table. The tabulated end points themselves are
    /// in range.
    pub fn hunt(&self, x: f64, guess: usize) -> Option<usize> {
        let n = self.x.len();
        let (lo, hi) = if self.ascending {
            (self.x[0], self.x[n - 1])
        } else {
            (self.x[n - 1], self.x[0])
        };
        if !(lo..=hi).contains(&x) {
            return None;
        }

        let brackets = |j: usize| {
            let (a, b) = (self.x[j - 1], self.x[j]);
            if self.ascending {
                a <= x && x <= b
            } else {
                b <= x && x <= a
            }
        };

        let j = guess.clamp(1, n - 1);
        if brackets(j) {
            return Some(j);
        }
        if j + 1 < n && brackets(j + 1) {
            return Some(j + 1);
        }
        let above = if self.ascending {
            self.x.partition_point(|&v| v <= x)
        } else {
            self.x.partition_point(|&v| v >= x)
        };
        Some(above.clamp(1, n - 1))
    }

    /// Linearly interpolates Y at `x`.
    ///
    /// # Errors
    /// `OutOfRange` if `x` lies outside the tabulated X values.
    pub fn interpolate(&self, x: f64) -> Result<f64> {
        self.interpolate_from(x, self.len() / 2)
    }

    fn interpolate_from(&self, x: f64, guess: usize) -> Result<f64> {
        let j = self
            .hunt(x, guess)
            .ok_or(InterpError::OutOfRange { x })?;
        let (x0, x1) = (self.x[j - 1], self.x[j]);
        let (y0, y1) = (self.y[j - 1], self.y[j]);
        Ok(((x - x0) * y1 + (x1 - x) * y0) / (x1 - x0))
    }

    /// Interpolates onto `nx` evenly spaced points from `x1` to `x2` inclusive.
    ///
    /// # Errors
    /// `GridTooSmall` for `nx < 2`; `OutOfRange` if any grid point lies outside the table.
    pub fn resample(&self, x1: f64, x2: f64, nx: usize) -> Result<Vec<(f64, f64)>> {
        if nx < 2 {
            return Err(InterpError::GridTooSmall { nx }.into());
        }
        let mut guess = self.len() / 2;
        let mut out = Vec::with_capacity(nx);
        for i in 0..nx {
            let x = x1 + (x2 - x1) * i as f64 / (nx - 1) as f64;
            let j = self.hunt(x, guess).ok_or(InterpError::OutOfRange { x })?;
            guess = j;
            out.push((x, self.interpolate_from(x, j)?));
        }
        tracing::trace!(nx, x1, x2, "Resampled table");
        Ok(out)
    }
}

fn parse_pair(text: &str) -> std::result::Result<(f64, f64), String> {
    let mut fields = text.split_whitespace();
    let mut next = |what: &str| -> std::result::Result<f64, String> {
        let field = fields.next().ok_or_else(|| format!("missing {what} value"))?;
        field
            .parse()
            .map_err(|_| format!("cannot read {what} value from '{field}'"))
    };
    let x = next("X")?;
    let y = next("Y")?;
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected extra column '{extra}'"));
    }
    Ok((x, y))
}
