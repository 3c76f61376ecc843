//! Normalized VAT lookup request.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Exactly two uppercase ASCII letters (ISO 3166 alpha-2 style prefix).
static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid country code regex"));

/// At least five uppercase letters or digits.
static VAT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{5,}$").expect("valid VAT number regex"));

/// Client input errors detected before any upstream call is made.
///
/// The `Display` text of each variant is the message returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid JSON in request body")]
    InvalidJson,

    #[error("Missing countryCode or vatNumber")]
    MissingFields,

    #[error("Invalid country code format (must be 2 letters)")]
    InvalidCountryCode,

    #[error("Invalid VAT number format")]
    InvalidVatNumber,
}

/// A VAT lookup with both fields normalized and validated.
///
/// Serializes to the VIES request body:
///
/// ```json
/// { "countryCode": "DE", "vatNumber": "123456789" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatCheckRequest {
    country_code: String,
    vat_number: String,
}

impl VatCheckRequest {
    /// Normalizes and validates raw user input.
    ///
    /// # Normalization Rules
    ///
    /// 1. **Country code**: uppercased, then trimmed
    /// 2. **VAT number**: uppercased, trimmed, every character outside `A-Z0-9` removed
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] unless the country code is
    /// exactly two letters after normalization.
    /// Returns [`ValidationError::InvalidVatNumber`] if fewer than five
    /// alphanumeric characters remain in the VAT number.
    pub fn new(country_code: &str, vat_number: &str) -> Result<Self, ValidationError> {
        let country_code = trim_input(&country_code.to_uppercase()).to_string();
        let vat_number = normalize_vat_number(vat_number);

        if !COUNTRY_CODE_REGEX.is_match(&country_code) {
            return Err(ValidationError::InvalidCountryCode);
        }

        if !VAT_NUMBER_REGEX.is_match(&vat_number) {
            return Err(ValidationError::InvalidVatNumber);
        }

        Ok(Self {
            country_code,
            vat_number,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn vat_number(&self) -> &str {
        &self.vat_number
    }

    /// VAT number with all but the last three characters hidden, for logs.
    pub fn masked_vat_number(&self) -> String {
        let visible = self.vat_number.len().saturating_sub(3);
        format!("{}{}", "*".repeat(visible), &self.vat_number[visible..])
    }
}

/// Trims whitespace and byte order marks from both ends.
fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn normalize_vat_number(input: &str) -> String {
    trim_input(&input.to_uppercase())
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_lowercase_and_spaces() {
        let request = VatCheckRequest::new("de", "123 456 789").unwrap();
        assert_eq!(request.country_code(), "DE");
        assert_eq!(request.vat_number(), "123456789");
    }

    #[test]
    fn test_trims_country_code() {
        let request = VatCheckRequest::new("  fr \n", "FR12345678901").unwrap();
        assert_eq!(request.country_code(), "FR");
    }

    #[test]
    fn test_trims_byte_order_mark_from_country_code() {
        let request = VatCheckRequest::new("\u{feff}de\u{feff}", "123456789").unwrap();
        assert_eq!(request.country_code(), "DE");
    }

    #[test]
    fn test_strips_punctuation_from_vat_number() {
        let request = VatCheckRequest::new("NL", "nl-8530.21.295/b01").unwrap();
        assert_eq!(request.vat_number(), "NL853021295B01");
    }

    #[test]
    fn test_strips_non_ascii_letters() {
        let request = VatCheckRequest::new("AT", "Ü12345").unwrap();
        assert_eq!(request.vat_number(), "12345");
    }

    #[test]
    fn test_rejects_single_letter_country_code() {
        let result = VatCheckRequest::new("u", "123456789");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidCountryCode);
    }

    #[test]
    fn test_rejects_three_letter_country_code() {
        let result = VatCheckRequest::new("USA", "123456789");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidCountryCode);
    }

    #[test]
    fn test_rejects_country_code_with_digit() {
        let result = VatCheckRequest::new("1A", "123456789");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidCountryCode);
    }

    #[test]
    fn test_rejects_blank_country_code() {
        let result = VatCheckRequest::new("   ", "123456789");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidCountryCode);
    }

    #[test]
    fn test_rejects_inner_space_in_country_code() {
        let result = VatCheckRequest::new("D E", "123456789");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidCountryCode);
    }

    #[test]
    fn test_rejects_short_vat_number() {
        let result = VatCheckRequest::new("DE", "AB1");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidVatNumber);
    }

    #[test]
    fn test_rejects_vat_number_short_after_stripping() {
        let result = VatCheckRequest::new("DE", "1-2-3-4");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidVatNumber);
    }

    #[test]
    fn test_accepts_minimum_length_vat_number() {
        let request = VatCheckRequest::new("DE", "12345").unwrap();
        assert_eq!(request.vat_number(), "12345");
    }

    #[test]
    fn test_country_code_checked_before_vat_number() {
        let result = VatCheckRequest::new("XXX", "1");
        assert_eq!(result.unwrap_err(), ValidationError::InvalidCountryCode);
    }

    #[test]
    fn test_serializes_camel_case() {
        let request = VatCheckRequest::new("de", "123456789").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "countryCode": "DE", "vatNumber": "123456789" })
        );
    }

    #[test]
    fn test_masked_vat_number() {
        let request = VatCheckRequest::new("DE", "123456789").unwrap();
        assert_eq!(request.masked_vat_number(), "******789");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidJson.to_string(),
            "Invalid JSON in request body"
        );
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Missing countryCode or vatNumber"
        );
    }
}
