//! Task record aggregate and the drafts it is built from.

use super::{Area, BoardDomainError, Progress, Schedule, TaskKey};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Separator between a parent topic and a subtask topic.
pub const SUBTASK_TOPIC_SEPARATOR: &str = " - ";

/// Validated candidate for a new task record, before a key is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    area: Area,
    schedule: Schedule,
    topic: String,
    progress: Progress,
    leader: String,
    member: String,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTopic`] when the topic is blank.
    pub fn new(
        area: Area,
        schedule: Schedule,
        topic: impl Into<String>,
        progress: Progress,
    ) -> Result<Self, BoardDomainError> {
        let raw = topic.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTopic);
        }

        Ok(Self {
            area,
            schedule,
            topic: trimmed.to_owned(),
            progress,
            leader: String::new(),
            member: String::new(),
        })
    }

    /// Sets the project leader.
    #[must_use]
    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = leader.into().trim().to_owned();
        self
    }

    /// Sets the project member.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into().trim().to_owned();
        self
    }
}

/// One row of the project table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    key: TaskKey,
    parent: Option<TaskKey>,
    area: Area,
    #[serde(flatten)]
    schedule: Schedule,
    topic: String,
    progress: Progress,
    leader: String,
    member: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a stored or edited task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskRecord {
    /// Stored key.
    pub key: TaskKey,
    /// Stored parent reference, if any.
    pub parent: Option<TaskKey>,
    /// Stored draft fields.
    pub draft: TaskDraft,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a root task record from a draft.
    #[must_use]
    pub fn new(key: TaskKey, draft: TaskDraft, clock: &impl Clock) -> Self {
        Self::assemble(key, None, draft, clock.utc())
    }

    /// Creates a subtask record under `parent`.
    ///
    /// The stored topic is `"<parent topic> - <draft topic>"`.
    #[must_use]
    pub fn new_subtask(
        key: TaskKey,
        parent: &Self,
        mut draft: TaskDraft,
        clock: &impl Clock,
    ) -> Self {
        draft.topic = format!("{}{SUBTASK_TOPIC_SEPARATOR}{}", parent.topic, draft.topic);
        Self::assemble(key, Some(parent.key), draft, clock.utc())
    }

    /// Reconstructs a record from stored or grid-edited data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskRecord) -> Self {
        Self::assemble(data.key, data.parent, data.draft, data.created_at)
    }

    fn assemble(
        key: TaskKey,
        parent: Option<TaskKey>,
        draft: TaskDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        let TaskDraft {
            area,
            schedule,
            topic,
            progress,
            leader,
            member,
        } = draft;

        Self {
            key,
            parent,
            area,
            schedule,
            topic,
            progress,
            leader,
            member,
            created_at,
        }
    }

    /// Returns the primary key.
    #[must_use]
    pub const fn key(&self) -> TaskKey {
        self.key
    }

    /// Returns the parent key for subtasks.
    #[must_use]
    pub const fn parent(&self) -> Option<TaskKey> {
        self.parent
    }

    /// Returns the task area.
    #[must_use]
    pub const fn area(&self) -> &Area {
        &self.area
    }

    /// Returns the task schedule.
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Returns the display topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the project leader.
    #[must_use]
    pub fn leader(&self) -> &str {
        &self.leader
    }

    /// Returns the project member.
    #[must_use]
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Drops the parent reference, keeping the derived topic.
    pub const fn detach_parent(&mut self) {
        self.parent = None;
    }
}
