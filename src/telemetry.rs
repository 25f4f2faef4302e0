//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    util::{SubscriberInitExt, TryInitError},
};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive is malformed.
    #[error("invalid log filter `{directive}`: {source}")]
    Filter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser error.
        #[source]
        source: ParseError,
    },
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Installs the fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used as the filter.
///
/// # Errors
///
/// Returns [`TelemetryError`] when `fallback` does not parse or a global
/// subscriber is already set.
pub fn init_tracing(fallback: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(fallback).map_err(|source| TelemetryError::Filter {
            directive: fallback.to_owned(),
            source,
        })
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}
