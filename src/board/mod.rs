//! Task table management for the dashboard.
//!
//! This module owns the project-tracking table: adding root tasks, adding
//! subtasks under a selected parent, deleting tasks by key, and replacing the
//! whole table from the editable grid. Every mutation passes through an
//! access gate. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! [`seed`] holds the example rows the dashboard starts with.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;

#[cfg(test)]
mod tests;
