//! VAT lookup service.

use crate::domain::entities::{VatCheckRequest, VatCheckResult};
use crate::domain::registries::{RegistryError, VatRegistry};
use crate::error::AppError;
use std::sync::Arc;

/// Service forwarding validated lookups to a VAT registry.
///
/// Translates registry failures into client-safe errors:
/// - non-success upstream status becomes [`AppError::ServiceUnavailable`]
/// - transport and body faults become [`AppError::Internal`]
///
/// Upstream detail is logged here and never returned to the caller.
pub struct VatCheckService {
    registry: Arc<dyn VatRegistry>,
}

impl VatCheckService {
    /// Creates a new VAT check service.
    pub fn new(registry: Arc<dyn VatRegistry>) -> Self {
        Self { registry }
    }

    /// Checks a normalized VAT number against the registry.
    ///
    /// Makes exactly one upstream call. Failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ServiceUnavailable`] if the registry answers with a
    /// non-success status.
    /// Returns [`AppError::Internal`] on network errors, timeouts or a non-JSON
    /// answer.
    pub async fn check(&self, request: &VatCheckRequest) -> Result<VatCheckResult, AppError> {
        match self.registry.check_vat_number(request).await {
            Ok(result) => {
                tracing::info!(
                    country_code = request.country_code(),
                    vat_number = %request.masked_vat_number(),
                    "VAT lookup completed"
                );
                Ok(result)
            }
            Err(RegistryError::Unavailable { status, reason }) => {
                tracing::error!(
                    status,
                    reason = reason.as_deref().unwrap_or(""),
                    country_code = request.country_code(),
                    "VIES API error"
                );
                Err(AppError::ServiceUnavailable)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    country_code = request.country_code(),
                    "VIES lookup failed"
                );
                Err(AppError::Internal)
            }
        }
    }
}
