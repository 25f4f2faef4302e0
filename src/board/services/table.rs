//! Service layer for gated task table mutations.

use crate::board::{
    domain::{
        AccessDenied, Area, BoardDomainError, Credential, Operator, PersistedTaskRecord, Progress,
        RowSelection, Schedule, TaskDraft, TaskKey, TaskRecord,
    },
    ports::{AccessGate, RemovedTask, TaskTableRepository, TaskTableRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Request payload for a new task or subtask, as typed into a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    /// Area label.
    pub area: String,
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Display topic.
    pub topic: String,
    /// Completion percentage.
    pub progress: i64,
    /// Project leader.
    pub leader: String,
    /// Project member.
    pub member: String,
}

impl NewTaskRequest {
    /// Creates a request with the scheduling fields; progress starts at zero
    /// and leader and member are blank.
    #[must_use]
    pub fn new(
        area: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            topic: topic.into(),
            progress: 0,
            leader: String::new(),
            member: String::new(),
        }
    }

    /// Sets the completion percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: i64) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the project leader.
    #[must_use]
    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = leader.into();
        self
    }

    /// Sets the project member.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    fn into_draft(self) -> Result<TaskDraft, BoardDomainError> {
        let area = Area::parse(&self.area)?;
        let schedule = Schedule::parse(&self.start_date, &self.end_date)?;
        let progress = Progress::new(self.progress)?;
        Ok(TaskDraft::new(area, schedule, self.topic, progress)?
            .with_leader(self.leader)
            .with_member(self.member))
    }
}

/// One row submitted by the editable grid for a full table replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridRow {
    /// Row key.
    pub key: u64,
    /// Parent key for subtasks.
    #[serde(default)]
    pub parent: Option<u64>,
    /// Area label.
    pub area: String,
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Display topic.
    pub topic: String,
    /// Completion percentage.
    pub progress: i64,
    /// Project leader.
    #[serde(default)]
    pub leader: String,
    /// Project member.
    #[serde(default)]
    pub member: String,
    /// Original creation time; rows without one are stamped with the
    /// current time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GridRow {
    fn into_record(self, now: DateTime<Utc>) -> Result<TaskRecord, BoardDomainError> {
        let key = TaskKey::new(self.key)?;
        let parent = self.parent.map(TaskKey::new).transpose()?;
        let draft = NewTaskRequest {
            area: self.area,
            start_date: self.start_date,
            end_date: self.end_date,
            topic: self.topic,
            progress: self.progress,
            leader: self.leader,
            member: self.member,
        }
        .into_draft()?;

        Ok(TaskRecord::from_persisted(PersistedTaskRecord {
            key,
            parent,
            draft,
            created_at: self.created_at.unwrap_or(now),
        }))
    }
}

/// Service-level errors for task table operations.
#[derive(Debug, Error)]
pub enum TaskTableError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskTableRepositoryError),
    /// The access gate rejected the credential.
    #[error("unauthorized: {0}")]
    Unauthorized(AccessDenied),
    /// A subtask needs exactly one selected parent row.
    #[error("select exactly one parent row to add a subtask")]
    NoParentSelected,
    /// The selected parent row does not exist.
    #[error("parent task {0} not found")]
    ParentNotFound(TaskKey),
    /// A replacement table contains the same key twice.
    #[error("task key {0} appears more than once")]
    DuplicateKey(TaskKey),
}

/// Result type for task table service operations.
pub type TaskTableResult<T> = Result<T, TaskTableError>;

/// Task table store.
///
/// Mutations are serialised through a single write lock so that key
/// allocation, parent lookup and insertion happen atomically even when the
/// service is shared between concurrent requests.
pub struct TaskTableService<R, G, C>
where
    R: TaskTableRepository,
    G: AccessGate,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    gate: Arc<G>,
    clock: Arc<C>,
    write_lock: Mutex<()>,
}

impl<R, G, C> TaskTableService<R, G, C>
where
    R: TaskTableRepository,
    G: AccessGate,
    C: Clock + Send + Sync,
{
    /// Creates a new task table service.
    #[must_use]
    pub fn new(repository: Arc<R>, gate: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            gate,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    fn authorize(&self, credential: &Credential, action: &str) -> TaskTableResult<Operator> {
        self.gate.authorize(credential).map_err(|denied| {
            warn!(action, reason = %denied, "table mutation rejected");
            TaskTableError::Unauthorized(denied)
        })
    }

    /// Appends a root task with the next free key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::Unauthorized`] when the credential is
    /// rejected, [`TaskTableError::Domain`] when validation fails, or
    /// [`TaskTableError::Repository`] when storage fails. The table is left
    /// unchanged in every error case.
    pub async fn add_task(
        &self,
        request: NewTaskRequest,
        credential: &Credential,
    ) -> TaskTableResult<TaskRecord> {
        let operator = self.authorize(credential, "add task")?;
        let draft = request.into_draft()?;

        let _guard = self.write_lock.lock().await;
        let key = self.repository.allocate_key().await?;
        let record = TaskRecord::new(key, draft, &*self.clock);
        self.repository.insert(&record).await?;

        info!(key = %record.key(), topic = record.topic(), %operator, "task added");
        Ok(record)
    }

    /// Appends a subtask under the single selected row.
    ///
    /// The subtask topic becomes `"<parent topic> - <request topic>"` and the
    /// record keeps an explicit reference to its parent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::NoParentSelected`] unless exactly one row is
    /// selected, [`TaskTableError::Unauthorized`] when the credential is
    /// rejected, [`TaskTableError::ParentNotFound`] when the selected row is
    /// gone, and domain or repository errors as for [`Self::add_task`].
    pub async fn add_subtask(
        &self,
        request: NewTaskRequest,
        credential: &Credential,
        selection: &RowSelection,
    ) -> TaskTableResult<TaskRecord> {
        let parent_key = selection.single().ok_or(TaskTableError::NoParentSelected)?;
        let operator = self.authorize(credential, "add subtask")?;
        let draft = request.into_draft()?;

        let _guard = self.write_lock.lock().await;
        let parent = self
            .repository
            .find_by_key(parent_key)
            .await?
            .ok_or(TaskTableError::ParentNotFound(parent_key))?;
        let key = self.repository.allocate_key().await?;
        let record = TaskRecord::new_subtask(key, &parent, draft, &*self.clock);
        self.repository.insert(&record).await?;

        info!(
            key = %record.key(),
            parent = %parent_key,
            topic = record.topic(),
            %operator,
            "subtask added"
        );
        Ok(record)
    }

    /// Removes the task with the given key.
    ///
    /// Returns `Ok(None)` and leaves the table untouched when the key is
    /// absent. Subtasks of the removed task stay in the table with their
    /// parent reference cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::Unauthorized`] when the credential is
    /// rejected or [`TaskTableError::Repository`] when storage fails.
    pub async fn delete_task(
        &self,
        key: TaskKey,
        credential: &Credential,
    ) -> TaskTableResult<Option<TaskRecord>> {
        let operator = self.authorize(credential, "delete task")?;

        let _guard = self.write_lock.lock().await;
        let Some(RemovedTask { record, orphaned }) =
            self.repository.remove_and_orphan(key).await?
        else {
            debug!(%key, "delete ignored, key absent");
            return Ok(None);
        };

        info!(%key, orphaned, %operator, "task deleted");
        Ok(Some(record))
    }

    /// Overwrites the editable fields of one row.
    ///
    /// The key, the parent reference and the creation time are kept. Returns
    /// `Ok(None)` and leaves the table untouched when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::Unauthorized`] when the credential is
    /// rejected, [`TaskTableError::Domain`] when validation fails, or
    /// [`TaskTableError::Repository`] when storage fails.
    pub async fn update_task(
        &self,
        key: TaskKey,
        request: NewTaskRequest,
        credential: &Credential,
    ) -> TaskTableResult<Option<TaskRecord>> {
        let operator = self.authorize(credential, "update task")?;
        let draft = request.into_draft()?;

        let _guard = self.write_lock.lock().await;
        let Some(existing) = self.repository.find_by_key(key).await? else {
            debug!(%key, "update ignored, key absent");
            return Ok(None);
        };
        let record = TaskRecord::from_persisted(PersistedTaskRecord {
            key,
            parent: existing.parent(),
            draft,
            created_at: existing.created_at(),
        });
        if !self.repository.update(&record).await? {
            return Ok(None);
        }

        info!(%key, topic = record.topic(), %operator, "task updated");
        Ok(Some(record))
    }

    /// Replaces the whole table with rows edited in the grid.
    ///
    /// The grid edits and drops rows but never mints keys: every key must
    /// already have been issued by the table. Parent references to keys
    /// missing from the new table, or to the row itself, are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::Unauthorized`] when the credential is
    /// rejected, [`TaskTableError::Domain`] when any row is invalid or names
    /// an unissued key, [`TaskTableError::DuplicateKey`] when a key repeats, or
    /// [`TaskTableError::Repository`] when storage fails. Nothing is
    /// replaced on error.
    pub async fn replace_rows(
        &self,
        rows: Vec<GridRow>,
        credential: &Credential,
    ) -> TaskTableResult<Vec<TaskRecord>> {
        let operator = self.authorize(credential, "replace rows")?;

        let now = self.clock.utc();
        let mut seen = HashSet::with_capacity(rows.len());
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let record = row.into_record(now)?;
            if !seen.insert(record.key()) {
                return Err(TaskTableError::DuplicateKey(record.key()));
            }
            records.push(record);
        }
        for record in &mut records {
            let dangling = record
                .parent()
                .is_some_and(|parent| parent == record.key() || !seen.contains(&parent));
            if dangling {
                record.detach_parent();
            }
        }

        let _guard = self.write_lock.lock().await;
        let issued = self.repository.high_water_mark().await?;
        if let Some(unissued) = records.iter().find(|record| record.key().value() > issued) {
            return Err(BoardDomainError::UnissuedTaskKey {
                key: unissued.key().value(),
                issued,
            }
            .into());
        }
        let count = records.len();
        self.repository.replace_all(records.clone()).await?;

        info!(rows = count, %operator, "table replaced");
        Ok(records)
    }

    /// Returns all rows in table order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::Repository`] when storage fails.
    pub async fn list(&self) -> TaskTableResult<Vec<TaskRecord>> {
        Ok(self.repository.list().await?)
    }

    /// Looks up one row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTableError::Repository`] when storage fails.
    pub async fn find(&self, key: TaskKey) -> TaskTableResult<Option<TaskRecord>> {
        Ok(self.repository.find_by_key(key).await?)
    }
}
