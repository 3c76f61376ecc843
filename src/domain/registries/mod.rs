//! Port definitions for external VAT registries.
//!
//! Traits define contracts implemented by the infrastructure layer.

pub mod vat_registry;

pub use vat_registry::{RegistryError, VatRegistry};

#[cfg(test)]
pub use vat_registry::MockVatRegistry;
