//! Registry trait for VAT number lookups.

use crate::domain::entities::{VatCheckRequest, VatCheckResult};
use async_trait::async_trait;

/// Errors raised while talking to a VAT registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry answered with a non-success HTTP status.
    #[error("registry responded with status {status}")]
    Unavailable {
        status: u16,
        reason: Option<String>,
    },

    /// The request could not be sent or the response could not be read.
    #[error("registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered with a body that is not JSON.
    #[error("registry returned a malformed body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Interface for services able to validate a VAT number.
///
/// # Implementations
///
/// - [`crate::infrastructure::vies::ViesClient`] - EU VIES REST API
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/vies_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VatRegistry: Send + Sync {
    /// Looks up a normalized VAT number.
    ///
    /// Exactly one request is made per call; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] if the registry rejects the request.
    /// Returns [`RegistryError::Transport`] on network failures and timeouts.
    /// Returns [`RegistryError::InvalidBody`] if the answer is not JSON.
    async fn check_vat_number(
        &self,
        request: &VatCheckRequest,
    ) -> Result<VatCheckResult, RegistryError>;
}
