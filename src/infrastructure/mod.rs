//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`vies`] - HTTP client for the EU VIES REST API

pub mod vies;
