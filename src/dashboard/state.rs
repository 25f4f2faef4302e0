//! Shared application state for request handlers.

use std::sync::Arc;

use mockable::DefaultClock;

use super::PageRenderer;
use crate::board::{
    adapters::{access::SessionGate, memory::InMemoryTaskTable},
    domain::TaskRecord,
    services::{TaskTableResult, TaskTableService},
};
use crate::chart::{TimelineChart, project};

/// Table service as wired for the running dashboard.
pub type DashboardService = TaskTableService<InMemoryTaskTable, SessionGate, DefaultClock>;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<DashboardService>,
    sessions: Arc<SessionGate>,
    clock: Arc<DefaultClock>,
    renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Wires the table store, access gate and page renderer together.
    #[must_use]
    pub fn new(table: InMemoryTaskTable, gate: SessionGate, renderer: PageRenderer) -> Self {
        let sessions = Arc::new(gate);
        let clock = Arc::new(DefaultClock);
        let service =
            TaskTableService::new(Arc::new(table), Arc::clone(&sessions), Arc::clone(&clock));

        Self {
            service: Arc::new(service),
            sessions,
            clock,
            renderer: Arc::new(renderer),
        }
    }

    /// Returns the table service.
    #[must_use]
    pub fn service(&self) -> &DashboardService {
        &self.service
    }

    /// Returns the session gate used for login and logout.
    #[must_use]
    pub fn sessions(&self) -> &SessionGate {
        &self.sessions
    }

    /// Returns the clock used to stamp sessions.
    #[must_use]
    pub fn clock(&self) -> &DefaultClock {
        &self.clock
    }

    /// Returns the page renderer.
    #[must_use]
    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    /// Reads the current rows and projects the chart from them.
    pub(super) async fn snapshot(&self) -> TaskTableResult<(Vec<TaskRecord>, TimelineChart)> {
        let rows = self.service.list().await?;
        let chart = project(&rows);
        Ok((rows, chart))
    }
}
