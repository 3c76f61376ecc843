//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export VIES_TIMEOUT_SECONDS="15"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `VIES_ENDPOINT` - VIES check endpoint (default: the official EU REST API)
//! - `VIES_USER_AGENT` - `User-Agent` sent to VIES (default: `VAT-Checker/1.0`,
//!   empty string disables the header)
//! - `VIES_TIMEOUT_SECONDS` - Upstream request timeout (default: 30)

use crate::infrastructure::vies::{DEFAULT_USER_AGENT, VIES_ENDPOINT};
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub vies_endpoint: String,
    /// `None` when the operator opted out of client identification.
    pub vies_user_agent: Option<String>,
    pub vies_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            vies_endpoint: VIES_ENDPOINT.to_string(),
            vies_user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            vies_timeout_seconds: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to [`Config::default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let vies_endpoint = env::var("VIES_ENDPOINT").unwrap_or(defaults.vies_endpoint);

        let vies_user_agent = match env::var("VIES_USER_AGENT") {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(v),
            Err(_) => defaults.vies_user_agent,
        };

        let vies_timeout_seconds = env::var("VIES_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.vies_timeout_seconds);

        Self {
            listen_addr,
            log_level,
            log_format,
            vies_endpoint,
            vies_user_agent,
            vies_timeout_seconds,
        }
    }

    /// Parses the configured VIES endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an absolute `http` or `https` URL.
    pub fn vies_endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.vies_endpoint)
            .with_context(|| format!("VIES_ENDPOINT is not a valid URL: '{}'", self.vies_endpoint))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => anyhow::bail!("VIES_ENDPOINT must use http or https, got '{}'", other),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `vies_endpoint` is not an http(s) URL
    /// - `vies_timeout_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.vies_endpoint_url()?;

        if self.vies_timeout_seconds == 0 {
            anyhow::bail!("VIES_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  VIES endpoint: {}", self.vies_endpoint);
        match &self.vies_user_agent {
            Some(user_agent) => tracing::info!("  VIES user agent: {}", user_agent),
            None => tracing::info!("  VIES user agent: disabled"),
        }
        tracing::info!("  VIES timeout: {}s", self.vies_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
