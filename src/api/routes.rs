//! API route configuration.
//!
//! All API endpoints are public; browsers reach them cross-origin.

use crate::api::handlers::{check_vat_handler, method_not_allowed_handler, preflight_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{MethodRouter, post},
};

/// VAT check routes.
///
/// # Endpoints
///
/// - `POST    /check-vat`                      - Validate a VAT number with VIES
/// - `OPTIONS /check-vat`                      - CORS preflight
/// - `*       /check-vat`                      - `405 Method Not Allowed`
/// - `/.netlify/functions/check-vat`           - Same handlers, legacy function path
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/check-vat", check_vat_methods())
        .route("/.netlify/functions/check-vat", check_vat_methods())
}

fn check_vat_methods() -> MethodRouter<AppState> {
    post(check_vat_handler)
        .options(preflight_handler)
        .fallback(method_not_allowed_handler)
}
