//! Application services for task table orchestration.

mod table;

pub use table::{GridRow, NewTaskRequest, TaskTableError, TaskTableResult, TaskTableService};
