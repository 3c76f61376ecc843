//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::vat_check_service::VatCheckService`] - VAT number lookups against a registry

pub mod services;
