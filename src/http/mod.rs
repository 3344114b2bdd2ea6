//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS, body limit, request ID, tracing)
//!     → request.rs (normalize into RequestDescription)
//!     → report (console log, side effect only)
//!     → response.rs (ack payload, always 200)
//!     → Send to client
//! ```

pub mod request;
pub mod request_id;
pub mod response;
pub mod server;

pub use request::{RequestBody, RequestDescription};
pub use response::{respond, AckPayload};
pub use server::HttpServer;
