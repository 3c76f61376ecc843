//! HTTP middleware for request processing.
//!
//! Provides CORS headers and observability middleware.

pub mod cors;
pub mod tracing;
