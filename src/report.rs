use serde::Serialize;

use crate::range::parse_range;
use crate::{AgeBreakdown, AnniversaryResult, CalendarDate, Options, RangeError, next_anniversary_with};

/// Everything an age calculator screen shows for one pair of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeReport {
    pub start:         CalendarDate,
    pub end:           CalendarDate,
    pub age:           AgeBreakdown,
    /// Counted from `today`, not from `end`. `None` when the next birthday
    /// falls past the last supported year.
    pub next_birthday: Option<AnniversaryResult>,
}

/// [`calculate_with`] using the default [`Options`].
///
/// # Errors
/// See [`crate::parse`].
pub fn calculate(
    raw_birth: &str,
    raw_target: Option<&str>,
    today: CalendarDate,
) -> Result<AgeReport, RangeError> {
    calculate_with(raw_birth, raw_target, today, &Options::default())
}

/// Validates the inputs, then computes the age at the target date and the
/// countdown to the next birthday as seen from `today`.
///
/// # Errors
/// See [`crate::parse`].
pub fn calculate_with(
    raw_birth: &str,
    raw_target: Option<&str>,
    today: CalendarDate,
    options: &Options,
) -> Result<AgeReport, RangeError> {
    let range = parse_range(raw_birth, raw_target, today)?;
    let (start, end) = range.dates();
    Ok(AgeReport {
        start,
        end,
        age: range.age(),
        next_birthday: next_anniversary_with(start, today, options),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeapDayPolicy;
    use crate::test_utils::date;

    #[test]
    fn test_calculate_defaults_target_to_today() {
        let report = calculate("1990-07-04", None, date(2024, 7, 5)).unwrap();
        assert_eq!(report.end, date(2024, 7, 5));
        assert_eq!(report.age.to_string(), "34 years, 0 months, 1 day");
        let next = report.next_birthday.unwrap();
        assert_eq!(next.next_date, date(2025, 7, 4));
        assert_eq!(next.days_remaining, 364);
    }

    #[test]
    fn test_countdown_uses_today_not_target() {
        let report = calculate("1990-07-04", Some("2000-01-01"), date(2024, 7, 1)).unwrap();
        assert_eq!(report.age.years, 9);
        let next = report.next_birthday.unwrap();
        assert_eq!(next.next_date, date(2024, 7, 4));
        assert_eq!(next.days_remaining, 3);
    }

    #[test]
    fn test_calculate_with_options() {
        let options = Options {
            leap_day: LeapDayPolicy::February28,
        };
        let report = calculate_with("2000-02-29", None, date(2023, 2, 1), &options).unwrap();
        assert_eq!(report.next_birthday.unwrap().next_date, date(2023, 2, 28));
    }

    #[test]
    fn test_calculate_propagates_errors() {
        assert_eq!(
            calculate("", None, date(2024, 1, 1)),
            Err(RangeError::MissingStart)
        );
        assert!(matches!(
            calculate("2025-01-01", None, date(2024, 1, 1)),
            Err(RangeError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn test_serialize() {
        let report = calculate("2000-02-29", Some("2023-03-01"), date(2023, 3, 1)).unwrap();
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            serde_json::json!({
                "start": "2000-02-29",
                "end": "2023-03-01",
                "age": {
                    "years": 23,
                    "months": 0,
                    "days": 1,
                    "total_days": 8401,
                    "total_months": 276
                },
                "next_birthday": { "next_date": "2023-03-01", "days_remaining": 0 }
            })
        );
    }
}
