use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use super::TimeError;
use crate::Result;

/// Days from 0001-01-01 (day 1) to the MJD zero point, 1858-11-17.
const MJD_FROM_CE: i64 = 678_576;

/// Accepted text forms, tried in order.
const DATE_FORMATS: [&str; 2] = ["%d %b %Y", "%Y-%m-%d"];

/// A UTC calendar date.
///
/// Displays as `17 Nov 1961` and parses either that form or ISO `1961-11-17`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from its components, failing for days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                TimeError::InvalidDate {
                    reason: format!("{day}/{month}/{year} does not exist"),
                }
                .into()
            })
    }

    /// Creates a date from a Modified Julian Day number.
    pub fn from_mjd(mjd: i64) -> Result<Self> {
        mjd.checked_add(MJD_FROM_CE)
            .and_then(|days| i32::try_from(days).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Date)
            .ok_or_else(|| {
                TimeError::InvalidDate {
                    reason: format!("MJD {mjd} is outside the supported calendar"),
                }
                .into()
            })
    }

    /// Modified Julian Day number (days since 1858-11-17).
    pub fn mjd(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - MJD_FROM_CE
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Full English name of the day of the week.
    pub fn day_of_week(&self) -> &'static str {
        match self.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d %b %Y"))
    }
}

impl FromStr for Date {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Date)
            .ok_or_else(|| {
                TimeError::Parse {
                    input: s.to_string(),
                    reason: "expected a date like '17 Nov 1961' or '1961-11-17'".to_string(),
                }
                .into()
            })
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
