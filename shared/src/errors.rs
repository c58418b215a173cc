//! Validation errors raised before any request leaves the process

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field {field} is not a number: {input:?}")]
    InvalidNumber { field: String, input: String },

    #[error("Field {field} must not be negative (got {value})")]
    NegativeValue { field: String, value: f64 },

    #[error("Field {field} must be a finite number")]
    NotFinite { field: String },

    #[error("Batch name must not be empty")]
    EmptyName,

    #[error("Batch id already exists: {id}")]
    DuplicateId { id: String },

    #[error("Inventory is empty; add at least one batch")]
    EmptyInventory,

    #[error("No batch at index {index} (registry holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown optimization mode: {input}")]
    UnknownMode { input: String },

    #[error("Unknown algorithm: {input}")]
    UnknownAlgorithm { input: String },

    #[error("Unknown parameter profile: {input}")]
    UnknownProfile { input: String },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField { field: field.to_string() }
    }

    pub fn invalid_number(field: &str, input: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            input: input.to_string(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that an already-typed value is finite and non-negative
pub fn ensure_non_negative(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field: field.to_string() });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Parse operator text into a finite, non-negative number
pub fn parse_non_negative(field: &str, raw: Option<&str>) -> ValidationResult<f64> {
    let text = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| ValidationError::missing(field))?;
    let value: f64 = text.parse().map_err(|_| ValidationError::invalid_number(field, text))?;
    ensure_non_negative(field, value)
}

/// Parse operator text into a non-negative whole number
pub fn parse_whole(field: &str, raw: Option<&str>) -> ValidationResult<u32> {
    let text = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| ValidationError::missing(field))?;
    match text.parse::<i64>() {
        Ok(value) if value < 0 => Err(ValidationError::NegativeValue {
            field: field.to_string(),
            value: value as f64,
        }),
        Ok(value) => u32::try_from(value).map_err(|_| ValidationError::invalid_number(field, text)),
        Err(_) => Err(ValidationError::invalid_number(field, text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative_accepts_decimals() {
        assert_eq!(parse_non_negative("price", Some(" 120000.5 ")), Ok(120000.5));
        assert_eq!(parse_non_negative("acid", Some("0")), Ok(0.0));
    }

    #[test]
    fn test_parse_non_negative_rejects_bad_input() {
        assert_eq!(parse_non_negative("price", None), Err(ValidationError::missing("price")));
        assert_eq!(parse_non_negative("price", Some("   ")), Err(ValidationError::missing("price")));
        assert_eq!(
            parse_non_negative("price", Some("abc")),
            Err(ValidationError::invalid_number("price", "abc"))
        );
        assert!(matches!(
            parse_non_negative("stock", Some("-3")),
            Err(ValidationError::NegativeValue { .. })
        ));
        assert!(matches!(
            parse_non_negative("stock", Some("NaN")),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole("expiry", Some("90")), Ok(90));
        assert!(matches!(parse_whole("expiry", Some("-1")), Err(ValidationError::NegativeValue { .. })));
        assert!(matches!(parse_whole("expiry", Some("9.5")), Err(ValidationError::InvalidNumber { .. })));
    }
}
