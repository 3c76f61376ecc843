//! reqwest-based VIES REST client.

use crate::config::Config;
use crate::domain::entities::{VatCheckRequest, VatCheckResult};
use crate::domain::registries::{RegistryError, VatRegistry};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Official VIES REST endpoint for single VAT number checks.
pub const VIES_ENDPOINT: &str =
    "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Client identification sent with every upstream request unless disabled.
pub const DEFAULT_USER_AGENT: &str = "VAT-Checker/1.0";

/// VIES client sharing one connection pool across all requests.
///
/// Cloning is cheap; the inner [`reqwest::Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct ViesClient {
    http: Client,
    endpoint: Url,
}

impl ViesClient {
    /// Creates a new VIES client.
    ///
    /// # Arguments
    ///
    /// - `endpoint` - URL receiving the `POST` lookup
    /// - `user_agent` - Optional `User-Agent` header value
    /// - `timeout` - Total time allowed for one request, body included
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the TLS backend cannot be initialized.
    pub fn new(
        endpoint: Url,
        user_agent: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().timeout(timeout);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    /// Builds the client from service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let endpoint = config.vies_endpoint_url()?;
        Self::new(
            endpoint,
            config.vies_user_agent.as_deref(),
            Duration::from_secs(config.vies_timeout_seconds),
        )
        .context("Failed to build VIES HTTP client")
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl VatRegistry for ViesClient {
    async fn check_vat_number(
        &self,
        request: &VatCheckRequest,
    ) -> Result<VatCheckResult, RegistryError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Unavailable {
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response.bytes().await?;
        Ok(VatCheckResult::from_slice(&body)?)
    }
}
