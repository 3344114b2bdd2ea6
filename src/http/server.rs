//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single wildcard handler
//! - Wire up middleware (CORS, body limit, request ID, tracing)
//! - Serve on a bound listener until shutdown is triggered
//!
//! # Design Decisions
//! - Every method on every path reaches the same handler
//! - Shutdown drops the serve future: in-flight requests are not drained

use std::future::IntoFuture;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::Request,
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::request::RequestDescription;
use crate::http::request_id::{request_id_of, MakeRequestUuidV4};
use crate::http::response::{respond, AckPayload};
use crate::lifecycle::{ShutdownListener, ShutdownReason};
use crate::report::RequestLogger;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub logger: RequestLogger,
}

/// HTTP server for the webhook tester.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, logger: RequestLogger) -> Self {
        let state = AppState { logger };
        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(webhook_handler))
            .route("/{*path}", any(webhook_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(CorsLayer::permissive())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        request_id = %request_id_of(req),
                        method = %req.method(),
                        uri = %req.uri(),
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownListener,
    ) -> Result<ShutdownReason, ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let serve = axum::serve(listener, self.router).into_future();

        let reason = tokio::select! {
            result = serve => {
                result?;
                ShutdownReason::Requested
            }
            reason = shutdown.wait() => reason,
        };

        tracing::info!(reason = %reason, "HTTP server stopped");
        Ok(reason)
    }
}

/// Log the request, then acknowledge it.
async fn webhook_handler(
    State(state): State<AppState>,
    description: RequestDescription,
) -> Json<AckPayload> {
    tracing::debug!(
        method = %description.method,
        url = %description.url,
        content_type = %description.content_type,
        "Webhook received"
    );

    state.logger.log(&description);
    Json(respond(&description))
}
