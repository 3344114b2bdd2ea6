//! Startup: bind the listener and greet the operator.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;
use crate::error::ServerError;
use crate::report::format::{Line, Span, Tone};

/// Bind the configured address. Failure is fatal.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(address = %listener.local_addr()?, "Listener bound");
    Ok(listener)
}

/// Console banner printed once the listener is up.
pub fn banner(addr: SocketAddr) -> Vec<Line> {
    let port = addr.port();
    let url = format!("http://localhost:{port}");

    vec![
        vec![Span::new("Webhook Tester Server is running!", Tone::Notice)],
        vec![
            Span::new("Listening on port: ", Tone::Timestamp),
            Span::new(port.to_string(), Tone::Strong),
        ],
        vec![
            Span::new("Server URL: ", Tone::Url),
            Span::new(url.as_str(), Tone::Strong),
        ],
        vec![Span::new(
            "Ready to capture webhooks on any path and method!",
            Tone::Query,
        )],
        vec![Span::new(
            format!(
                "Try: curl -X POST {url}/webhook -H 'Content-Type: application/json' -d '{{\"test\": \"data\"}}'"
            ),
            Tone::Hint,
        )],
    ]
}
