//! UTC calendar dates and times of day.
//!
//! A [`Time`] is a [`Date`] plus a fractional hour in `[0, 24)`. Both convert to and from
//! Modified Julian Dates (MJD = JD - 2400000.5), which is also how they are stored in binary
//! headers: a day number and, for times, the hour of day.
//!
//! Time-scale conversions (TT, TDB, light-travel corrections) need an ephemeris and are not
//! provided here.

mod date;
mod errors;

use std::{fmt, str::FromStr};

use chrono::{Timelike, Utc};
use serde::{Serialize, Serializer};

pub use date::Date;
pub use errors::TimeError;

use crate::Result;

/// A time of day broken into clock fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    /// Fraction of a second, `[0, 1)`
    pub fsec: f64,
}

/// A UTC instant: a calendar date and a fractional hour of day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Time {
    date: Date,
    hour: f64,
}

impl Time {
    /// Creates a time from a date and an hour of day in `[0, 24)`.
    pub fn new(date: Date, hour: f64) -> Result<Self> {
        check_hour(hour)?;
        Ok(Self { date, hour })
    }

    /// Creates a time from clock fields.
    pub fn from_hms(date: Date, hour: u32, min: u32, sec: f64) -> Result<Self> {
        valid_time(hour, min, sec)?;
        Ok(Self {
            date,
            hour: f64::from(hour) + f64::from(min) / 60.0 + sec / 3600.0,
        })
    }

    /// Creates a time from a Modified Julian Date.
    pub fn from_mjd(mjd: f64) -> Result<Self> {
        if !mjd.is_finite() {
            return Err(TimeError::InvalidDate {
                reason: format!("MJD {mjd} is not finite"),
            }
            .into());
        }
        let day = mjd.floor();
        let mut date = Date::from_mjd(day as i64)?;
        let mut hour = 24.0 * (mjd - day);
        // floating round-off can land exactly on the next midnight
        if hour >= 24.0 {
            date = Date::from_mjd(date.mjd() + 1)?;
            hour = 0.0;
        }
        Ok(Self { date, hour })
    }

    /// The current UTC time.
    pub fn now() -> Self {
        let now = Utc::now();
        let seconds =
            f64::from(now.num_seconds_from_midnight()) + f64::from(now.nanosecond()) / 1e9;
        Self {
            date: Date::from(now.date_naive()),
            // leap-second nanoseconds can push past the end of the day
            hour: seconds.min(86_399.999_999) / 3600.0,
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Modified Julian Date.
    pub fn mjd(&self) -> f64 {
        self.date.mjd() as f64 + self.hour / 24.0
    }

    /// Splits the hour into clock fields, rounding a fraction that is within 1e-7 s of the next
    /// whole second up to it.
    pub fn hms(&self) -> Hms {
        let hour = self.hour.floor();
        let minutes = 60.0 * (self.hour - hour);
        let min = minutes.floor();
        let seconds = 60.0 * (minutes - min);
        let sec = seconds.floor();
        let mut t = Hms {
            hour: hour as u32,
            min: min as u32,
            sec: sec as u32,
            fsec: seconds - sec,
        };
        if t.fsec > 0.9999999 {
            t.fsec = 0.0;
            t.sec += 1;
            if t.sec == 60 {
                t.sec = 0;
                t.min += 1;
                if t.min == 60 {
                    t.min = 0;
                    t.hour += 1;
                    if t.hour == 24 {
                        t.hour = 0;
                    }
                }
            }
        }
        t
    }

    /// Returns this time shifted by `seconds` (which may be negative).
    pub fn add_seconds(&self, seconds: f64) -> Result<Self> {
        Self::from_mjd(self.mjd() + seconds / 86_400.0)
    }

    /// Seconds elapsed from `earlier` to `self`.
    pub fn seconds_since(&self, earlier: &Time) -> f64 {
        86_400.0 * (self.date.mjd() - earlier.date.mjd()) as f64
            + 3_600.0 * (self.hour - earlier.hour)
    }
}

fn check_hour(hour: f64) -> Result<()> {
    if (0.0..24.0).contains(&hour) {
        Ok(())
    } else {
        Err(TimeError::HourOutOfRange { hour }.into())
    }
}

fn valid_time(hour: u32, min: u32, sec: f64) -> Result<()> {
    if hour > 23 {
        return Err(TimeError::InvalidClock {
            reason: format!("hour = {hour} is out of range 0 to 23"),
        }
        .into());
    }
    if min > 59 {
        return Err(TimeError::InvalidClock {
            reason: format!("minute = {min} is out of range 0 to 59"),
        }
        .into());
    }
    if !(0.0..60.0).contains(&sec) {
        return Err(TimeError::InvalidClock {
            reason: format!("second = {sec} is out of range 0 to <60"),
        }
        .into());
    }
    Ok(())
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.hms();
        write!(
            f,
            "{}, {:02}:{:02}:{:02}.{:05}",
            self.date,
            t.hour,
            t.min,
            t.sec,
            (100_000.0 * t.fsec).floor() as u32
        )
    }
}

/// Parses `"17 Nov 1961, 01:03:04.02"`; the date part accepts any [`Date`] form.
impl FromStr for Time {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |reason: &str| -> crate::Error {
            TimeError::Parse {
                input: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let (date, clock) = s
            .split_once(',')
            .ok_or_else(|| parse_error("expected 'date, hh:mm:ss.s'"))?;
        let date: Date = date.parse()?;

        let mut fields = clock.trim().splitn(3, ':');
        let (Some(hour), Some(min), Some(sec)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(parse_error("expected a clock time 'hh:mm:ss.s'"));
        };
        let hour = hour
            .parse::<u32>()
            .map_err(|_| parse_error("hour is not an integer"))?;
        let min = min
            .parse::<u32>()
            .map_err(|_| parse_error("minute is not an integer"))?;
        let sec = sec
            .parse::<f64>()
            .map_err(|_| parse_error("second is not a number"))?;

        Time::from_hms(date, hour, min, sec)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
