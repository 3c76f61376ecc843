//! Domain layer containing the VAT lookup model and the upstream port.
//!
//! # Architecture
//!
//! - [`entities`] - Normalized lookup request and opaque lookup result
//! - [`registries`] - Trait definition for VAT registries (VIES)
//!
//! # Lookup Flow
//!
//! 1. HTTP handler decodes the raw payload
//! 2. [`entities::VatCheckRequest::new`] normalizes and validates both fields
//! 3. [`crate::application::services::VatCheckService`] calls a [`registries::VatRegistry`]
//! 4. The registry answer is relayed unchanged as [`entities::VatCheckResult`]

pub mod entities;
pub mod registries;
