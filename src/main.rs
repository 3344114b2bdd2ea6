//! Webhook Tester
//!
//! Point a webhook sender at this server and watch what arrives.
//!
//! # Architecture Overview
//!
//! ```text
//!     Webhook sender
//!     ─────────────────▶ http::server (any method, any path)
//!                             │
//!                             ├─▶ http::request   (RequestDescription)
//!                             ├─▶ report          (console block, side effect)
//!                             └─▶ http::response  (200 + ack JSON)
//!
//!     lifecycle: startup banner, SIGINT/SIGTERM → Shutdown → exit 0
//! ```

use webhook_tester::config::load_config;
use webhook_tester::http::HttpServer;
use webhook_tester::lifecycle::{self, shutdown, signals, startup, Shutdown};
use webhook_tester::observability::logging;
use webhook_tester::report::{Palette, RequestLogger};
use webhook_tester::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = load_config()?;
    logging::init(&config.observability)?;

    tracing::info!("webhook-tester v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        max_body_bytes = config.limits.max_body_bytes,
        color = config.console.color,
        "Configuration loaded"
    );

    let palette = Palette::new(config.console.color);

    let listener = startup::bind(&config.listener).await?;
    lifecycle::announce(palette, &startup::banner(listener.local_addr()?));

    // Subscribe before the watcher can fire
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_watcher(shutdown.clone());

    let server = HttpServer::new(&config, RequestLogger::stdout(palette));
    let reason = server.run(listener, server_shutdown).await?;

    lifecycle::announce(palette, &[shutdown::notice(reason)]);
    tracing::info!("Shutdown complete");
    Ok(())
}
