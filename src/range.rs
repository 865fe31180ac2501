use crate::{AgeBreakdown, CalendarDate, ParseError, decompose, prelude::*};

/// Which of the two inputs a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

/// Error type for turning raw inputs into an ordered pair of dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// No start date was supplied.
    #[error("Missing start date")]
    MissingStart,

    /// One of the inputs is not a real calendar date.
    #[error("Invalid {field} date: {source}")]
    InvalidDate {
        field:  DateField,
        #[source]
        source: ParseError,
    },

    /// Start date is after end date.
    #[error("Start date ({start}) is after end date ({end})")]
    StartAfterEnd { start: CalendarDate, end: CalendarDate },
}

/// Validates a pair of raw inputs.
///
/// A missing or blank `raw_end` means `today`. The returned dates are the
/// parsed inputs, in input order, with `start <= end`.
///
/// # Errors
/// `MissingStart` for a blank start, `InvalidDate` naming the offending
/// input, or `StartAfterEnd`.
pub fn parse(
    raw_start: &str,
    raw_end: Option<&str>,
    today: CalendarDate,
) -> Result<(CalendarDate, CalendarDate), RangeError> {
    parse_range(raw_start, raw_end, today).map(|range| range.dates())
}

pub(crate) fn parse_range(
    raw_start: &str,
    raw_end: Option<&str>,
    today: CalendarDate,
) -> Result<DateRange, RangeError> {
    if raw_start.trim().is_empty() {
        tracing::debug!("rejecting empty start date");
        return Err(RangeError::MissingStart);
    }
    let start = parse_field(raw_start, DateField::Start)?;
    let end = match raw_end.map(str::trim) {
        None | Some("") => today,
        Some(raw) => parse_field(raw, DateField::End)?,
    };
    DateRange::new(start, end)
}

fn parse_field(raw: &str, field: DateField) -> Result<CalendarDate, RangeError> {
    raw.parse().map_err(|source: ParseError| {
        tracing::debug!(%field, input = raw, error = %source, "rejecting date");
        RangeError::InvalidDate { field, source }
    })
}

/// An inclusive pair of dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::StartAfterEnd` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            tracing::debug!(%start, %end, "rejecting reversed range");
            return Err(RangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Age breakdown from start to end.
    pub fn age(&self) -> AgeBreakdown {
        decompose(self.start, self.end)
    }
}
