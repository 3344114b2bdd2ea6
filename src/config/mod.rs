//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, HOST, NO_COLOR)
//!     → loader.rs (read & parse)
//!     → ServerConfig (immutable)
//!     → consumed by main, HttpServer and the console palette
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an empty environment is valid
//! - No config file and no command-line flags

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from, ConfigError};
pub use schema::{ConsoleConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ServerConfig};
