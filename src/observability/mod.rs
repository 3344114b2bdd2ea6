//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Subsystems emit tracing events:
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//!
//! HTTP layer:
//!     → TraceLayer span per request, tagged with x-request-id
//! ```

pub mod logging;
