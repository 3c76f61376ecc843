//! Opaque VIES lookup result.

use serde_json::value::RawValue;

/// JSON document returned by the VAT registry.
///
/// The structure (validity flag, trader name, address, ...) belongs to VIES.
/// The document is only checked to be well-formed JSON and is relayed to the
/// caller byte for byte, preserving key order and formatting.
#[derive(Debug, Clone)]
pub struct VatCheckResult(Box<RawValue>);

impl VatCheckResult {
    /// Parses a registry response body.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body is not a single JSON value.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Box<RawValue>>(body).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub fn into_body(self) -> String {
        String::from(self.0.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_key_order() {
        let body = br#"{"valid":true,"countryCode":"DE","name":"ACME GmbH"}"#;
        let result = VatCheckResult::from_slice(body).unwrap();
        assert_eq!(
            result.as_str(),
            r#"{"valid":true,"countryCode":"DE","name":"ACME GmbH"}"#
        );
    }

    #[test]
    fn test_rejects_html_error_page() {
        let body = b"<html><body>Service Unavailable</body></html>";
        assert!(VatCheckResult::from_slice(body).is_err());
    }

    #[test]
    fn test_rejects_empty_body() {
        assert!(VatCheckResult::from_slice(b"").is_err());
    }
}
