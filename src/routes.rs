//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Liveness check (public)
//! - `/check-vat`        - VAT lookup API (public, CORS enabled)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - `Access-Control-Allow-Origin: *` on every response
//! - **Panic recovery** - Handler panics become a generic `500`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::error::panic_response;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors::allow_origin_layer())
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/check-vat/` is served like `/check-vat`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
