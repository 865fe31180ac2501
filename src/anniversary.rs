use serde::{Deserialize, Serialize};

use crate::consts::{FEBRUARY, FEBRUARY_DAYS_COMMON, MARCH, MIN_DAY};
use crate::{CalendarDate, Year};

/// Where a February 29th anniversary falls in a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeapDayPolicy {
    /// Celebrate on the last day of February.
    #[serde(rename = "february_28")]
    February28,
    /// Celebrate on the day after February 28th, the date a Feb 29 anchor
    /// rolls over to when the day does not exist.
    #[default]
    #[serde(rename = "march_1")]
    March1,
}

/// Caller-tunable knobs for anniversary lookup.
///
/// Deserializes from a host's own config with every field optional:
///
/// ```
/// let opts: age_calc::Options = serde_json::from_str(r#"{"leap_day":"february_28"}"#)?;
/// assert_eq!(opts.leap_day, age_calc::LeapDayPolicy::February28);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub leap_day: LeapDayPolicy,
}

/// The next occurrence of an anchor's month/day and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AnniversaryResult {
    /// On or after the reference date.
    pub next_date:      CalendarDate,
    /// Zero only when `next_date` is the reference date itself.
    pub days_remaining: u32,
}

/// [`next_anniversary_with`] using the default [`Options`].
pub fn next_anniversary(anchor: CalendarDate, reference: CalendarDate) -> Option<AnniversaryResult> {
    next_anniversary_with(anchor, reference, &Options::default())
}

/// Finds the first date on or after `reference` sharing `anchor`'s month and
/// day. The anchor's year is ignored.
///
/// Returns `None` only when that date would fall after `MAX_YEAR`.
pub fn next_anniversary_with(
    anchor: CalendarDate,
    reference: CalendarDate,
    options: &Options,
) -> Option<AnniversaryResult> {
    let this_year = occurrence_in(anchor, reference.year_typed(), options.leap_day);
    let next_date = if this_year < reference {
        let Some(following) = reference.year_typed().checked_next() else {
            tracing::debug!(%anchor, %reference, "next anniversary is past the supported range");
            return None;
        };
        occurrence_in(anchor, following, options.leap_day)
    } else {
        this_year
    };

    let days_remaining = u32::try_from(reference.days_until(&next_date)).ok()?;
    tracing::trace!(%anchor, %reference, %next_date, days_remaining, "located anniversary");
    Some(AnniversaryResult {
        next_date,
        days_remaining,
    })
}

/// The anchor's month/day in `year`, resolving Feb 29 through `policy`.
fn occurrence_in(anchor: CalendarDate, year: Year, policy: LeapDayPolicy) -> CalendarDate {
    if let Some(date) = anchor.with_year(year) {
        return date;
    }
    // Only Feb 29 can be missing from a year; every other month/day exists.
    debug_assert!(anchor.is_leap_day());
    let (month, day) = match policy {
        LeapDayPolicy::February28 => (FEBRUARY, FEBRUARY_DAYS_COMMON),
        LeapDayPolicy::March1 => (MARCH, MIN_DAY),
    };
    CalendarDate::new(year.get(), month, day).unwrap_or(anchor)
}
