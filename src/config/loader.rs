//! Configuration loading from the process environment.

use crate::config::schema::ServerConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),
    #[error("invalid HOST value {0:?}: expected an IP address")]
    InvalidHost(String),
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Unset and empty variables fall back to defaults.
pub fn load_config_from<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = ServerConfig::default();

    if let Some(port) = var("PORT") {
        config.listener.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }

    if let Some(host) = var("HOST") {
        config.listener.host = host.trim().to_string();
    }

    // https://no-color.org
    if var("NO_COLOR").is_some() {
        config.console.color = false;
    }

    // Fail before bind time rather than at it
    config.listener.bind_address()?;

    Ok(config)
}
