use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, DECEMBER, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use std::num::{NonZeroU8, NonZeroU16};

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` past `MAX_YEAR`.
    pub fn checked_next(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A day-of-month value, validated against a concrete year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay { year, month, day: value };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`; 0 for a month outside `1..=12`, so no day
/// validates against it.
pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// The (year, month) immediately before the given one, wrapping December
/// into the prior year. Year 0 is only ever produced for January 0001.
pub(crate) const fn previous_month(year: u16, month: u8) -> (u16, u8) {
    if month == JANUARY {
        (year.saturating_sub(1), DECEMBER)
    } else {
        (year, month - 1)
    }
}

/// Day number in the proleptic Gregorian calendar, with 0001-01-01 as day 1.
///
/// Uses Howard Hinnant's `days_from_civil`, shifted so the year starts in
/// March and the leap day lands at the end of the computational year.
pub(crate) const fn day_number(year: u16, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY { year as i64 - 1 } else { year as i64 };
    let m = month as i64;
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let yoe = y - era * GREGORIAN_CYCLE as i64; // [0, 399]
    let mp = if m > 2 { m - 3 } else { m + 9 }; // [0, 11], March == 0
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    // 0000-03-01 is computational day 0 and sits 306 days before 0001-01-01
    era * DAYS_PER_GREGORIAN_CYCLE + doe - 306 + 1
}

/// Inverse of [`day_number`]. Returns `(year, month, day)` with a signed year
/// so callers can range-check before narrowing.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_day_number(n: i64) -> (i64, u8, u8) {
    let z = n - 1 + 306;
    let era = z.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let doe = z - era * DAYS_PER_GREGORIAN_CYCLE; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * GREGORIAN_CYCLE as i64 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}
