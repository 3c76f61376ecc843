//! Permissive CORS headers for browser clients.
//!
//! Preflight requests are answered explicitly by
//! [`crate::api::handlers::preflight_handler`]; every other response gets
//! `Access-Control-Allow-Origin: *` from [`allow_origin_layer`] unless the
//! handler already set it.

use axum::http::{HeaderName, HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Headers returned with `204 No Content` on `OPTIONS`.
pub fn preflight_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
        (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
    ]
}

/// Adds `Access-Control-Allow-Origin: *` to responses that lack it.
///
/// Covers responses produced outside the handlers, such as unknown routes
/// and recovered panics.
pub fn allow_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    )
}
