//! Shared constructors for unit tests.

use crate::CalendarDate;

/// Builds a date that is known to be valid.
///
/// # Panics
/// Panics on an invalid date; only meant for literals in tests.
pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day)
        .unwrap_or_else(|e| panic!("invalid test date {year}-{month}-{day}: {e}"))
}

/// Any valid date in the representable range.
pub fn arb_date() -> impl proptest::strategy::Strategy<Value = CalendarDate> {
    use proptest::prelude::*;

    (1u16..=crate::MAX_YEAR, 1u8..=12, 1u8..=31).prop_map(|(year, month, day)| {
        date(year, month, day.min(crate::types::days_in_month(year, month)))
    })
}

/// Two valid dates ordered so that `start <= end`.
pub fn arb_ordered_pair() -> impl proptest::strategy::Strategy<Value = (CalendarDate, CalendarDate)>
{
    use proptest::prelude::*;

    (arb_date(), arb_date()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}
