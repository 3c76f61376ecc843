//! Core data structures for a single VAT lookup.

pub mod vat_check_request;
pub mod vat_check_result;

pub use vat_check_request::{ValidationError, VatCheckRequest};
pub use vat_check_result::VatCheckResult;
