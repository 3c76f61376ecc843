#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use url::Url;
use vat_checker::application::services::VatCheckService;
use vat_checker::infrastructure::vies::{DEFAULT_USER_AGENT, ViesClient};
use vat_checker::state::AppState;

pub const VIES_PATH: &str = "/taxation_customs/vies/rest-api/check-vat-number";

pub fn create_test_client(endpoint: &str) -> ViesClient {
    ViesClient::new(
        Url::parse(endpoint).unwrap(),
        Some(DEFAULT_USER_AGENT),
        Duration::from_secs(5),
    )
    .unwrap()
}

pub fn create_test_state(endpoint: &str) -> AppState {
    let client = create_test_client(endpoint);
    let vat_service = Arc::new(VatCheckService::new(Arc::new(client)));

    AppState::new(vat_service)
}
