//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::VatCheckService;

/// Per-process state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub vat_service: Arc<VatCheckService>,
}

impl AppState {
    pub fn new(vat_service: Arc<VatCheckService>) -> Self {
        Self { vat_service }
    }
}
