//! EU VAT Information Exchange System (VIES) integration.
//!
//! Provides [`ViesClient`], the production [`crate::domain::registries::VatRegistry`].

mod client;

pub use client::{DEFAULT_USER_AGENT, VIES_ENDPOINT, ViesClient};
