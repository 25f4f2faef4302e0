//! In-memory repository for the task table.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{TaskKey, TaskRecord},
    ports::{
        RemovedTask, TaskTableRepository, TaskTableRepositoryError, TaskTableRepositoryResult,
    },
};

/// Thread-safe in-memory task table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskTable {
    state: Arc<RwLock<InMemoryTableState>>,
}

#[derive(Debug, Default)]
struct InMemoryTableState {
    rows: Vec<TaskRecord>,
    high_water: u64,
}

impl InMemoryTableState {
    fn max_present_key(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| row.key().value())
            .max()
            .unwrap_or_default()
    }
}

impl InMemoryTaskTable {
    /// Creates an empty in-memory table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-populated with `rows`, in the given order.
    #[must_use]
    pub fn with_rows(rows: Vec<TaskRecord>) -> Self {
        let mut state = InMemoryTableState {
            rows,
            high_water: 0,
        };
        state.high_water = state.max_present_key();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn poisoned(err: impl ToString) -> TaskTableRepositoryError {
    TaskTableRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskTableRepository for InMemoryTaskTable {
    async fn list(&self) -> TaskTableRepositoryResult<Vec<TaskRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.rows.clone())
    }

    async fn find_by_key(&self, key: TaskKey) -> TaskTableRepositoryResult<Option<TaskRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.rows.iter().find(|row| row.key() == key).cloned())
    }

    async fn allocate_key(&self) -> TaskTableRepositoryResult<TaskKey> {
        let mut state = self.state.write().map_err(poisoned)?;
        let next = state
            .high_water
            .max(state.max_present_key())
            .checked_add(1)
            .ok_or(TaskTableRepositoryError::KeySpaceExhausted)?;
        let key = TaskKey::new(next).map_err(TaskTableRepositoryError::persistence)?;
        state.high_water = next;
        Ok(key)
    }

    async fn insert(&self, record: &TaskRecord) -> TaskTableRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.rows.iter().any(|row| row.key() == record.key()) {
            return Err(TaskTableRepositoryError::DuplicateKey(record.key()));
        }

        state.high_water = state.high_water.max(record.key().value());
        state.rows.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &TaskRecord) -> TaskTableRepositoryResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        let Some(row) = state.rows.iter_mut().find(|row| row.key() == record.key()) else {
            return Ok(false);
        };
        row.clone_from(record);
        Ok(true)
    }

    async fn remove_and_orphan(
        &self,
        key: TaskKey,
    ) -> TaskTableRepositoryResult<Option<RemovedTask>> {
        let mut state = self.state.write().map_err(poisoned)?;
        let Some(position) = state.rows.iter().position(|row| row.key() == key) else {
            return Ok(None);
        };
        let record = state.rows.remove(position);
        let mut orphaned = 0;
        for row in state
            .rows
            .iter_mut()
            .filter(|row| row.parent() == Some(key))
        {
            row.detach_parent();
            orphaned += 1;
        }
        Ok(Some(RemovedTask { record, orphaned }))
    }

    async fn high_water_mark(&self) -> TaskTableRepositoryResult<u64> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.high_water.max(state.max_present_key()))
    }

    async fn replace_all(&self, records: Vec<TaskRecord>) -> TaskTableRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.rows = records;
        state.high_water = state.high_water.max(state.max_present_key());
        Ok(())
    }
}
