//! Configuration schema definitions.
//!
//! Every field has a default so the server runs with an empty environment.

use std::net::SocketAddr;

use crate::config::loader::ConfigError;

/// Body size cap applied before a request reaches the handler (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Root configuration for the webhook tester.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Request limits enforced by the HTTP layer.
    pub limits: LimitsConfig,

    /// Operator console settings.
    pub console: ConsoleConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// Resolve host and port into a socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let raw = if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        };
        raw.parse().map_err(|_| ConfigError::InvalidHost(self.host.clone()))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Request limits.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Operator console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Emit ANSI styles in the request report and banners.
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter directives used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "webhook_tester=info,tower_http=info".to_string(),
        }
    }
}
