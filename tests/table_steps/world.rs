//! Shared world state for project table BDD scenarios.

use std::sync::Arc;

use ganttboard::{
    board::{
        adapters::{
            access::{SessionGate, SharedSecretGate},
            memory::InMemoryTaskTable,
        },
        domain::TaskRecord,
        services::{TaskTableError, TaskTableService},
    },
    chart::TimelineChart,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Secret the scenario gate accepts.
pub const SECRET: &str = "rabbit1";

/// Service type used by the BDD world.
pub type TestTableService = TaskTableService<InMemoryTaskTable, SessionGate, DefaultClock>;

/// Scenario world for project table behaviour tests.
pub struct TableWorld {
    pub service: TestTableService,
    pub last_added: Option<TaskRecord>,
    pub last_error: Option<TaskTableError>,
    pub chart: Option<TimelineChart>,
}

impl TableWorld {
    /// Creates a world over a table holding `rows`.
    #[must_use]
    pub fn with_rows(rows: Vec<TaskRecord>) -> Self {
        let service = TaskTableService::new(
            Arc::new(InMemoryTaskTable::with_rows(rows)),
            Arc::new(SessionGate::new(SharedSecretGate::new(SECRET))),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            last_added: None,
            last_error: None,
            chart: None,
        }
    }
}

impl Default for TableWorld {
    fn default() -> Self {
        Self::with_rows(Vec::new())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TableWorld {
    TableWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
