//! DTOs for the VAT check endpoint.

use crate::domain::entities::ValidationError;
use serde::Deserialize;
use serde_json::{Number, Value};

/// Raw `POST /check-vat` payload, before normalization.
///
/// Fields are kept as loose JSON values so that a number sent as
/// `vatNumber` (`123456789`) is accepted the same way as its string form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVatPayload {
    #[serde(default)]
    pub country_code: Option<Value>,

    #[serde(default)]
    pub vat_number: Option<Value>,
}

impl CheckVatPayload {
    /// Decodes the request body.
    ///
    /// Any well-formed JSON document is accepted; documents that are not
    /// objects simply carry no fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJson`] if the body is not valid JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;

        match value {
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|_| ValidationError::InvalidJson)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Returns the textual `(countryCode, vatNumber)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if either field is absent,
    /// `null`, `false`, `0`, an empty string, an array or an object.
    pub fn into_fields(self) -> Result<(String, String), ValidationError> {
        match (
            field_text(self.country_code.as_ref()),
            field_text(self.vat_number.as_ref()),
        ) {
            (Some(country_code), Some(vat_number)) => Ok((country_code, vat_number)),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Renders a number without a fractional part when it is integral, so
/// `123456789.0` and `1.23456789e8` both read `123456789`.
fn number_text(n: &Number) -> String {
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
