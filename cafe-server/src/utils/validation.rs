//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so the limits declared
//! by the schema are checked here before anything reaches the database.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// name / location / seats / coffee_price
pub const MAX_TEXT_LEN: usize = 250;

/// map_url / img_url
pub const MAX_URL_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// 缺失/空白 → MissingData (统一提示语由调用方给出)，
/// 超长 → InvalidData。
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
    missing_message: &str,
) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::MissingData(missing_message.to_string()));
    }
    if value.len() > max_len {
        return Err(AppError::InvalidData(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::InvalidData(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("", "name", MAX_TEXT_LEN, "missing").is_err());
        assert!(validate_required_text("   ", "name", MAX_TEXT_LEN, "missing").is_err());
        assert!(validate_required_text("Mild Cafe", "name", MAX_TEXT_LEN, "missing").is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_TEXT_LEN, "missing").unwrap_err();
        assert!(matches!(err, AppError::InvalidData(_)));
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(None, "coffee_price", MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(Some("£2.50"), "coffee_price", MAX_TEXT_LEN).is_ok());
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_optional_text(Some(&long), "coffee_price", MAX_TEXT_LEN).is_err());
    }
}
