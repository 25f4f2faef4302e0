//! Command-line and environment configuration for the dashboard binary.

use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Dashboard startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "ganttboard")]
#[command(version)]
#[command(about = "Project table with a Gantt timeline, served over HTTP", long_about = None)]
pub struct DashboardConfig {
    /// Address to listen on
    #[arg(long, env = "GANTTBOARD_BIND", default_value = "127.0.0.1:8050")]
    pub bind: SocketAddr,

    /// Shared secret guarding table mutations
    #[arg(long, env = "GANTTBOARD_SECRET", default_value = "rabbit1", hide_env_values = true)]
    pub secret: String,

    /// Start with an empty table instead of the example rows
    #[arg(long)]
    pub empty: bool,

    /// Default log filter when `RUST_LOG` is unset
    #[arg(long, env = "GANTTBOARD_LOG", default_value = "info")]
    pub log_level: String,

    /// Page and chart title
    #[arg(long, default_value = "Gantt Chart Example")]
    pub title: String,
}

/// Errors raised by [`DashboardConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shared secret is blank.
    #[error("the shared secret must not be empty")]
    EmptySecret,
    /// The title is blank.
    #[error("the page title must not be empty")]
    EmptyTitle,
}

impl DashboardConfig {
    /// Checks values clap cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the secret or the title is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }
}
