//! Error types for board domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// Task keys start at 1.
    #[error("invalid task key {0}, expected a positive integer")]
    InvalidTaskKey(u64),

    /// A grid row names a key the table never issued.
    #[error("task key {key} was never issued, the highest issued key is {issued}")]
    UnissuedTaskKey {
        /// Submitted key.
        key: u64,
        /// Highest key issued so far.
        issued: u64,
    },

    /// The area label is empty after trimming.
    #[error("area must not be empty")]
    EmptyArea,

    /// The topic is empty after trimming.
    #[error("topic must not be empty")]
    EmptyTopic,

    /// The progress percentage lies outside `0..=100`.
    #[error("invalid progress {0}, expected a percentage between 0 and 100")]
    InvalidProgress(i64),

    /// The progress input is not a whole number.
    #[error("invalid progress '{0}', expected a whole number")]
    UnparseableProgress(String),

    /// A date input could not be parsed.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The end date precedes the start date.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },
}
