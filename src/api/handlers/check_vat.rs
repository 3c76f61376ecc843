//! Handlers for the VAT check endpoint.

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::check_vat::CheckVatPayload;
use crate::api::middleware::cors;
use crate::domain::entities::{ValidationError, VatCheckRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a VAT number with VIES.
///
/// # Endpoint
///
/// `POST /check-vat`
///
/// # Request Body
///
/// ```json
/// { "countryCode": "de", "vatNumber": "123 456 789" }
/// ```
///
/// Both fields are normalized (uppercase, `vatNumber` stripped to `A-Z0-9`)
/// before being forwarded as `{"countryCode":"DE","vatNumber":"123456789"}`.
///
/// # Response
///
/// **200 OK** with the VIES JSON document relayed unchanged, plus
/// `Cache-Control: no-cache`.
///
/// # Errors
///
/// - **400**: invalid JSON, missing field, malformed country code or VAT number
/// - **503**: VIES answered with a non-success status
/// - **500**: network failure, timeout or a non-JSON VIES answer
pub async fn check_vat_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.map_err(|e| {
        tracing::error!(error = %e, "Failed to read request body");
        AppError::Internal
    })?;

    let request = parse_request(&body).inspect_err(|e| {
        tracing::debug!(reason = %e, "Rejected VAT check request");
    })?;

    let result = state.vat_service.check(&request).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, cors::ALLOW_ORIGIN),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        result.into_body(),
    )
        .into_response())
}

/// Runs the validation pipeline: JSON decode, presence, normalization, format.
fn parse_request(body: &[u8]) -> Result<VatCheckRequest, ValidationError> {
    let (country_code, vat_number) = CheckVatPayload::from_slice(body)?.into_fields()?;
    VatCheckRequest::new(&country_code, &vat_number)
}

/// Answers CORS preflight requests.
///
/// # Endpoint
///
/// `OPTIONS /check-vat` - `204 No Content`, no body.
pub async fn preflight_handler() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, cors::preflight_headers())
}

/// Rejects every method other than `POST` and `OPTIONS`.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
