//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use webhook_tester::lifecycle::ShutdownReason;
use webhook_tester::report::{MemorySink, Palette, RequestLogger};
use webhook_tester::{HttpServer, ServerConfig, ServerError, Shutdown};

/// A running server bound to an ephemeral local port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub reports: Arc<MemorySink>,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<ShutdownReason, ServerError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Plain-text report blocks emitted so far.
    #[allow(dead_code)]
    pub fn reports(&self) -> Vec<String> {
        self.reports.blocks()
    }
}

/// Start the server with default configuration and an in-memory report sink.
pub async fn start_server() -> TestServer {
    start_server_with(ServerConfig::default()).await
}

#[allow(dead_code)]
pub async fn start_server_with(config: ServerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let reports = Arc::new(MemorySink::new());
    let logger = RequestLogger::new(Palette::plain(), reports.clone());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config, logger);

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        reports,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
