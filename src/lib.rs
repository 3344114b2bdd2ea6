//! Webhook Tester Library
//!
//! Accepts any request on any path, prints a readable report of it to the
//! console and answers with a fixed JSON acknowledgement.

pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod report;

pub use config::ServerConfig;
pub use error::ServerError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
