//! Ganttboard: a project-tracking table with a derived Gantt timeline.
//!
//! The table of task records is the source of truth. Every change goes
//! through a gated service, and the timeline chart is re-projected from the
//! rows after each change.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: task records, keys, areas and credentials
//! - **Ports**: the table repository and the access gate
//! - **Adapters**: the in-memory table and the shared-secret and session gates
//!
//! # Modules
//!
//! - [`board`]: task table domain, ports, adapters and service
//! - [`chart`]: projection of rows onto timeline intervals and SVG rendering
//! - [`dashboard`]: HTTP controller, HTML page and JSON API
//! - [`config`]: command-line and environment configuration
//! - [`telemetry`]: tracing subscriber setup

pub mod board;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod telemetry;
