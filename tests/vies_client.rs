mod common;

use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use url::Url;
use vat_checker::domain::entities::VatCheckRequest;
use vat_checker::domain::registries::{RegistryError, VatRegistry};
use vat_checker::infrastructure::vies::ViesClient;

fn request() -> VatCheckRequest {
    VatCheckRequest::new("de", "123 456 789").unwrap()
}

#[tokio::test]
async fn test_posts_normalized_request() {
    let server = MockServer::start_async().await;

    let vies_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(common::VIES_PATH)
                .header("Content-Type", "application/json")
                .header("User-Agent", "VAT-Checker/1.0")
                .json_body(json!({ "countryCode": "DE", "vatNumber": "123456789" }));
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"valid":true,"name":"ACME GmbH"}"#);
        })
        .await;

    let client = common::create_test_client(&server.url(common::VIES_PATH));

    let result = client.check_vat_number(&request()).await.unwrap();

    vies_mock.assert_async().await;
    assert_eq!(result.as_str(), r#"{"valid":true,"name":"ACME GmbH"}"#);
}

#[tokio::test]
async fn test_non_success_status_is_unavailable() {
    let server = MockServer::start_async().await;

    let vies_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(common::VIES_PATH);
            then.status(500).body("MS_UNAVAILABLE");
        })
        .await;

    let client = common::create_test_client(&server.url(common::VIES_PATH));

    let err = client.check_vat_number(&request()).await.unwrap_err();

    vies_mock.assert_hits_async(1).await;
    assert!(matches!(err, RegistryError::Unavailable { status: 500, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_invalid() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(common::VIES_PATH);
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = common::create_test_client(&server.url(common::VIES_PATH));

    let err = client.check_vat_number(&request()).await.unwrap_err();

    assert!(matches!(err, RegistryError::InvalidBody(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(common::VIES_PATH);
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({ "valid": true }));
        })
        .await;

    let client = ViesClient::new(
        Url::parse(&server.url(common::VIES_PATH)).unwrap(),
        None,
        Duration::from_millis(200),
    )
    .unwrap();

    let err = client.check_vat_number(&request()).await.unwrap_err();

    assert!(matches!(err, RegistryError::Transport(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = common::create_test_client("http://127.0.0.1:9/check-vat-number");

    let err = client.check_vat_number(&request()).await.unwrap_err();

    assert!(matches!(err, RegistryError::Transport(_)));
}
