//! Stampdesk web library.
//!
//! Serves the corporate stamp viewer and the roster admin panel. The crate is
//! a library so the router can be driven by the integration tests and the
//! `stampdesk` binary alike.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering (pages and the SVG stamp)
//! - In-memory user directory, seeded with the built-in roster
//! - In-memory `tower-sessions` store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod stamp;
pub mod state;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
    sentry_user_middleware,
};
use state::AppState;

/// Build the application router with its middleware stack.
///
/// Sentry layers are not included; the binary wraps the result with them.
pub fn build_app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(sentry_user_middleware))
        .layer(session_layer)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                        request_id = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        #[allow(clippy::cast_possible_truncation)]
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
