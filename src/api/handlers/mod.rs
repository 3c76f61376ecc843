//! HTTP request handlers for API endpoints.

pub mod check_vat;
pub mod health;

pub use check_vat::{check_vat_handler, method_not_allowed_handler, preflight_handler};
pub use health::health_handler;
