//! Data Transfer Objects for API requests and responses.

pub mod check_vat;
pub mod health;
