//! Calendar-accurate age breakdowns and birthday countdowns.
//!
//! Everything here is a pure function over [`CalendarDate`] values. The
//! caller supplies "today" explicitly; nothing reads the wall clock.
//!
//! ```
//! use age_calc::{CalendarDate, decompose, next_anniversary, parse};
//!
//! let today: CalendarDate = "2024-07-05".parse()?;
//! let (birth, end) = parse("1990-07-04", None, today)?;
//!
//! let age = decompose(birth, end);
//! assert_eq!((age.years, age.months, age.days), (34, 0, 1));
//!
//! let next = next_anniversary(birth, today).ok_or("out of range")?;
//! assert_eq!(next.next_date.to_string(), "2025-07-04");
//! assert_eq!(next.days_remaining, 364);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod age;
mod anniversary;
mod consts;
mod prelude;
mod range;
mod report;
mod types;

#[cfg(test)]
mod test_utils;

pub use age::{AgeBreakdown, decompose};
pub use anniversary::{
    AnniversaryResult, LeapDayPolicy, Options, next_anniversary, next_anniversary_with,
};
pub use consts::*;
pub use range::{DateField, DateRange, RangeError, parse};
pub use report::{AgeReport, calculate, calculate_with};
pub use types::{Day, Month, Year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_from_day_number, day_number, days_in_month};

/// A validated, time-zone-naive calendar date.
///
/// Fields are ordered year, month, day so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Builds a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Whether this date is February 29th.
    pub const fn is_leap_day(&self) -> bool {
        self.month.get() == FEBRUARY && self.day.get() == FEBRUARY_DAYS_LEAP
    }

    /// Days since the proleptic Gregorian epoch, 0001-01-01 being day 1.
    pub const fn day_number(&self) -> i64 {
        day_number(self.year.get(), self.month.get(), self.day.get())
    }

    /// Signed whole days from `self` to `other` (positive when `other` is later).
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Adds a (possibly negative) number of days.
    ///
    /// Returns `None` if the result falls outside `1..=MAX_YEAR`.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_day_number(self.day_number().checked_add(days)?);
        Self::new(u16::try_from(year).ok()?, month, day).ok()
    }

    /// Adds a (possibly negative) number of months, clamping the day to the
    /// length of the target month (Jan 31 + 1 month = Feb 28 or 29).
    ///
    /// Returns `None` if the result falls outside `1..=MAX_YEAR`.
    pub fn checked_add_months(self, months: i32) -> Option<Self> {
        let index = i64::from(self.year.get()) * 12 + i64::from(self.month.get() - 1);
        let shifted = index.checked_add(i64::from(months))?;
        let year = u16::try_from(shifted.div_euclid(12)).ok()?;
        let month = u8::try_from(shifted.rem_euclid(12) + 1).ok()?;
        let year = Year::new(year).ok()?;
        let day = self.day.get().min(days_in_month(year.get(), month));
        Self::new(year.get(), month, day).ok()
    }

    /// Calendar addition: years and months are applied together as one
    /// month offset (clamping the day once), then days are added.
    pub fn checked_add(self, years: i32, months: i32, days: i64) -> Option<Self> {
        let total_months = years.checked_mul(12)?.checked_add(months)?;
        self.checked_add_months(total_months)?.checked_add_days(days)
    }

    /// Same month and day in another year, if that date exists.
    pub(crate) fn with_year(self, year: Year) -> Option<Self> {
        Self::new(year.get(), self.month.get(), self.day.get()).ok()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, order) = if has_hyphen {
            // ISO format: YYYY-MM-DD
            (DATE_SEPARATOR, ComponentOrder::YearFirst)
        } else if has_slash {
            // Month-first format: MM/DD/YYYY
            (MONTH_FIRST_SEPARATOR, ComponentOrder::MonthFirst)
        } else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD or MM/DD/YYYY: {trimmed}"
            )));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 3 components separated by {separator}, found {}",
                parts.len()
            )));
        };

        let (year, month, day) = match order {
            ComponentOrder::YearFirst => (parse_u16(a)?, parse_u8(b)?, parse_u8(c)?),
            ComponentOrder::MonthFirst => (parse_u16(c)?, parse_u8(a)?, parse_u8(b)?),
        };
        Self::new(year, month, day)
    }
}

enum ComponentOrder {
    YearFirst,
    MonthFirst,
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
