//! Serves the Gantt dashboard over HTTP.
//!
//! Usage:
//!
//! ```text
//! ganttboard [--bind <addr>] [--secret <secret>] [--empty] [--log-level <filter>] [--title <title>]
//! ```
//!
//! Every flag also reads from the environment (`GANTTBOARD_BIND`,
//! `GANTTBOARD_SECRET`, `GANTTBOARD_LOG`). The table starts with ten example
//! rows unless `--empty` is given, and lives only as long as the process.

use clap::Parser;
use ganttboard::{
    board::{
        adapters::{
            access::{SessionGate, SharedSecretGate},
            memory::InMemoryTaskTable,
        },
        seed::example_rows,
    },
    chart::svg::TimelineSvg,
    config::DashboardConfig,
    dashboard::{AppState, PageRenderer, router},
    telemetry::init_tracing,
};
use mockable::DefaultClock;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = DashboardConfig::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;

    let table = if config.empty {
        InMemoryTaskTable::new()
    } else {
        InMemoryTaskTable::with_rows(example_rows(&DefaultClock)?)
    };
    let gate = SessionGate::new(SharedSecretGate::new(&config.secret));
    let renderer = PageRenderer::new(config.title, TimelineSvg::default())?;
    let app = router(AppState::new(table, gate, renderer));

    let listener = TcpListener::bind(config.bind).await?;
    info!(address = %listener.local_addr()?, seeded = !config.empty, "dashboard listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
}
