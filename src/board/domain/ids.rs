//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a task record.
///
/// Keys are assigned by the table store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskKey(u64);

impl TaskKey {
    /// Creates a validated task key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskKey`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidTaskKey(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion percentage of a task, between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Largest accepted percentage.
    pub const MAX: u8 = 100;

    /// Creates a validated progress percentage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidProgress`] when the value lies
    /// outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, BoardDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= Self::MAX)
            .map(Self)
            .ok_or(BoardDomainError::InvalidProgress(value))
    }

    /// Parses a percentage typed into a form field.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnparseableProgress`] for non-numeric
    /// input and [`BoardDomainError::InvalidProgress`] when out of range.
    pub fn parse(raw: &str) -> Result<Self, BoardDomainError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| BoardDomainError::UnparseableProgress(raw.to_owned()))?;
        Self::new(value)
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Rows currently selected in the grid.
///
/// Subtasks can only be added when exactly one row is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection(Vec<TaskKey>);

impl RowSelection {
    /// Creates a selection from the given keys, dropping duplicates.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = TaskKey>) -> Self {
        let mut selected: Vec<TaskKey> = Vec::new();
        for key in keys {
            if !selected.contains(&key) {
                selected.push(key);
            }
        }
        Self(selected)
    }

    /// Creates a selection holding exactly one row.
    #[must_use]
    pub fn one(key: TaskKey) -> Self {
        Self(vec![key])
    }

    /// Returns an empty selection.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Returns the selected key when exactly one row is selected.
    #[must_use]
    pub fn single(&self) -> Option<TaskKey> {
        match self.0.as_slice() {
            [key] => Some(*key),
            _ => None,
        }
    }
}

impl From<Option<TaskKey>> for RowSelection {
    fn from(key: Option<TaskKey>) -> Self {
        key.map_or_else(Self::none, Self::one)
    }
}
