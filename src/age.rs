use std::fmt;

use serde::Serialize;

use crate::CalendarDate;
use crate::consts::MONTHS_PER_YEAR;
use crate::types::{days_in_month, previous_month};

/// Calendar-correct difference between two dates.
///
/// `years * 12 + months == total_months` always holds, and adding
/// `years`, `months` and `days` to the start date with
/// [`CalendarDate::checked_add`] lands exactly on the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AgeBreakdown {
    pub years:        u32,
    /// Always in `0..=11`.
    pub months:       u32,
    /// Always in `0..=30`.
    pub days:         u32,
    /// Whole calendar days between the two dates.
    pub total_days:   u64,
    pub total_months: u32,
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

const fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Breaks the span from `start` to `end` into years, months and days.
///
/// `start` must not be later than `end`; [`crate::parse`] and
/// [`crate::DateRange`] guarantee that ordering.
///
/// A negative day difference borrows the month immediately preceding
/// `end`'s month. When the start day does not exist in that borrowed month
/// (the 31st borrowing a 30-day month, or the 29th–31st borrowing February)
/// it is clamped to that month's last day, which is where month addition
/// from `start` lands.
pub fn decompose(start: CalendarDate, end: CalendarDate) -> AgeBreakdown {
    debug_assert!(start <= end, "decompose: start {start} is after end {end}");

    let mut years = i32::from(end.year()) - i32::from(start.year());
    let mut months = i32::from(end.month()) - i32::from(start.month());
    let mut days = i32::from(end.day()) - i32::from(start.day());

    if days < 0 {
        let (borrow_year, borrow_month) = previous_month(end.year(), end.month());
        let borrowed = i32::from(days_in_month(borrow_year, borrow_month));
        days = i32::from(end.day()) + borrowed - i32::from(start.day()).min(borrowed);
        months -= 1;
    }

    if months < 0 {
        months += MONTHS_PER_YEAR;
        years -= 1;
    }

    let age = AgeBreakdown {
        years:        years.unsigned_abs(),
        months:       months.unsigned_abs(),
        days:         days.unsigned_abs(),
        total_days:   start.days_until(&end).unsigned_abs(),
        total_months: (years * MONTHS_PER_YEAR + months).unsigned_abs(),
    };
    tracing::trace!(%start, %end, %age, total_days = age.total_days, "decomposed age");
    age
}
