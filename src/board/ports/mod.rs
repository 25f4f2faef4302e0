//! Port contracts for task table management.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod access;
pub mod repository;

pub use access::AccessGate;
pub use repository::{
    RemovedTask, TaskTableRepository, TaskTableRepositoryError, TaskTableRepositoryResult,
};
