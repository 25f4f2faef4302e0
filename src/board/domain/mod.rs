//! Domain model for the project-tracking table.
//!
//! The board domain models task records, their schedules and categories,
//! row selection, and the credentials that guard mutations, while keeping
//! storage and transport concerns outside of the domain boundary.

mod access;
mod area;
mod error;
mod ids;
mod record;
mod schedule;

pub use access::{AccessDenied, Credential, Operator, SessionToken};
pub use area::{Area, FALLBACK_COLOR};
pub use error::BoardDomainError;
pub use ids::{Progress, RowSelection, TaskKey};
pub use record::{PersistedTaskRecord, SUBTASK_TOPIC_SEPARATOR, TaskDraft, TaskRecord};
pub use schedule::Schedule;
