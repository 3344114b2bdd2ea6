//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor `RUST_LOG`, falling back to the configured filter
//!
//! # Design Decisions
//! - Operational logs go to stderr; stdout is reserved for request reports
//! - Module targets are omitted to keep console lines short

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter};

use crate::config::ObservabilityConfig;

pub fn init(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
}
