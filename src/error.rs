//! HTTP-facing error type.
//!
//! Every variant renders as JSON with `Access-Control-Allow-Origin: *` so that
//! browser clients can read the error body.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;

use crate::domain::entities::ValidationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Failures surfaced to API clients.
///
/// Messages are fixed; internal detail is logged where the error is created
/// and never reaches the response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("VIES service temporarily unavailable. Please try again later.")]
    ServiceUnavailable,

    #[error("Internal server error. Please contact support.")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its JSON body.
    ///
    /// `405` responses carry only the message; all others echo the status code.
    pub fn to_error_body(&self) -> ErrorBody {
        let status = match self {
            AppError::MethodNotAllowed => None,
            _ => Some(self.status_code().as_u16()),
        };

        ErrorBody {
            error: self.to_string(),
            status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(self.to_error_body()),
        )
            .into_response()
    }
}

/// Renders a handler panic as a generic internal error.
///
/// Used with [`tower_http::catch_panic::CatchPanicLayer`].
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Request handler panicked");

    AppError::Internal.into_response()
}
