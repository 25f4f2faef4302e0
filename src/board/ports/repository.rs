//! Repository port for the ordered task table.

use crate::board::domain::{TaskKey, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task table repository operations.
pub type TaskTableRepositoryResult<T> = Result<T, TaskTableRepositoryError>;

/// Task table storage contract.
///
/// Implementations keep rows in insertion order and track the highest key
/// ever issued so that keys are never reused.
#[async_trait]
pub trait TaskTableRepository: Send + Sync {
    /// Returns all rows in table order.
    async fn list(&self) -> TaskTableRepositoryResult<Vec<TaskRecord>>;

    /// Finds a row by key.
    ///
    /// Returns `None` when the key is absent.
    async fn find_by_key(&self, key: TaskKey) -> TaskTableRepositoryResult<Option<TaskRecord>>;

    /// Reserves the next key: one past the larger of the highest key present
    /// and the highest key ever issued.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableRepositoryError::KeySpaceExhausted`] when no key is
    /// left.
    async fn allocate_key(&self) -> TaskTableRepositoryResult<TaskKey>;

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableRepositoryError::DuplicateKey`] when the key is
    /// already present.
    async fn insert(&self, record: &TaskRecord) -> TaskTableRepositoryResult<()>;

    /// Overwrites the row with the same key in place.
    ///
    /// Returns `false` when no such row exists.
    async fn update(&self, record: &TaskRecord) -> TaskTableRepositoryResult<bool>;

    /// Removes the row with the given key and clears the parent reference of
    /// every row that pointed at it, in one step.
    ///
    /// Returns `None` when the key is absent.
    async fn remove_and_orphan(
        &self,
        key: TaskKey,
    ) -> TaskTableRepositoryResult<Option<RemovedTask>>;

    /// Returns the highest key issued so far, or zero for a fresh table.
    async fn high_water_mark(&self) -> TaskTableRepositoryResult<u64>;

    /// Replaces every row at once.
    ///
    /// The key high-water mark never decreases.
    async fn replace_all(&self, records: Vec<TaskRecord>) -> TaskTableRepositoryResult<()>;
}

/// A removed row and the number of subtasks it left without a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    /// The row that was removed.
    pub record: TaskRecord,
    /// Rows whose parent reference was cleared.
    pub orphaned: usize,
}

/// Errors returned by task table repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskTableRepositoryError {
    /// A row with the same key already exists.
    #[error("duplicate task key: {0}")]
    DuplicateKey(TaskKey),

    /// Every representable key has been issued.
    #[error("task key space exhausted")]
    KeySpaceExhausted,

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskTableRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
