//! # VAT Checker
//!
//! A small HTTP service that validates EU VAT numbers through the VIES REST API,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Lookup request/result and the registry trait
//! - **Application Layer** ([`application`]) - Lookup orchestration and error mapping
//! - **Infrastructure Layer** ([`infrastructure`]) - VIES HTTP client
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST http://localhost:3000/check-vat \
//!   -H 'Content-Type: application/json' \
//!   -d '{"countryCode":"de","vatNumber":"123 456 789"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::VatCheckService;
    pub use crate::domain::entities::{VatCheckRequest, VatCheckResult};
    pub use crate::domain::registries::VatRegistry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::vies::ViesClient;
    pub use crate::state::AppState;
}
