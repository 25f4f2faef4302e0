//! Start and end dates of a task.

use super::BoardDomainError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Validated date interval with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Schedule {
    #[serde(rename = "start_date")]
    start: NaiveDate,
    #[serde(rename = "end_date")]
    end: NaiveDate,
}

impl Schedule {
    /// Creates a schedule from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EndBeforeStart`] when `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BoardDomainError> {
        if end < start {
            return Err(BoardDomainError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a schedule from date inputs.
    ///
    /// Accepts plain `YYYY-MM-DD` dates as produced by HTML date inputs and
    /// `YYYY-MM-DDTHH:MM:SS` timestamps, of which only the date is kept.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidDate`] for unparseable input and
    /// [`BoardDomainError::EndBeforeStart`] for inverted intervals.
    pub fn parse(start: &str, end: &str) -> Result<Self, BoardDomainError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Returns the first day of the interval.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the interval.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the interval length in whole days.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, BoardDomainError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT).map(|dt| dt.date()))
        .map_err(|_| BoardDomainError::InvalidDate(raw.to_owned()))
}
