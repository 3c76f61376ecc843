//! Business logic services for the application layer.

pub mod vat_check_service;

pub use vat_check_service::VatCheckService;
