//! Point-in-time type used to key price tables.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{CoreError, CoreResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A point in time with second resolution.
///
/// This is a newtype wrapper around `chrono::NaiveDateTime`. Timestamps
/// built from a calendar date sit at midnight, so date-only price tables
/// behave like plain calendar dates. The time of day is retained so that
/// two distinct instants less than one day apart can be told apart.
///
/// # Example
///
/// ```rust
/// use folio_core::types::Timestamp;
///
/// let open = Timestamp::from_ymd_hms(2025, 6, 15, 9, 30, 0).unwrap();
/// let close = Timestamp::from_ymd_hms(2025, 6, 15, 16, 0, 0).unwrap();
/// assert!(open < close);
/// assert_eq!(open.whole_days_between(&close), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp at midnight of the given calendar date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Timestamp(date.and_time(NaiveTime::MIN)))
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a timestamp from date and time-of-day components.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if any component is out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Timestamp)
            .ok_or_else(|| {
                CoreError::invalid_date(format!(
                    "{year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`) or date-time
    /// (`YYYY-MM-DDTHH:MM:SS`, space separator also accepted).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string matches neither form.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .map(Timestamp)
            .ok_or_else(|| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the calendar date, dropping the time of day.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns true if the timestamp sits exactly at midnight.
    #[must_use]
    pub fn is_midnight(&self) -> bool {
        self.0.time() == NaiveTime::MIN
    }

    /// Adds a number of days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result falls outside the
    /// representable range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Timestamp)
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{self} + {days} days is out of range"))
            })
    }

    /// Adds a number of seconds.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result falls outside the
    /// representable range.
    pub fn add_seconds(&self, seconds: i64) -> CoreResult<Self> {
        chrono::Duration::try_seconds(seconds)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Timestamp)
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{self} + {seconds} seconds is out of range"))
            })
    }

    /// Whole days elapsed from `self` to `other`, truncated toward zero.
    ///
    /// Negative when `other` is earlier. Two instants less than 24 hours
    /// apart yield `0` even when they fall on different calendar dates.
    #[must_use]
    pub fn whole_days_between(&self, other: &Timestamp) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDateTime`.
    #[must_use]
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_midnight() {
            write!(f, "{}", self.0.format(DATE_FORMAT))
        } else if self.0.nanosecond() == 0 {
            write!(f, "{}", self.0.format(DATE_TIME_FORMATS[0]))
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp(value)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp(date.and_time(NaiveTime::MIN))
    }
}

impl From<Timestamp> for NaiveDateTime {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl std::str::FromStr for Timestamp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = i64;

    /// Returns the whole days between two timestamps.
    fn sub(self, other: Timestamp) -> Self::Output {
        other.whole_days_between(&self)
    }
}
