//! Field parsing shared by the module form types.
//!
//! Forms keep raw input strings; these helpers turn them into typed
//! values with the error messages the dialogs surface as toasts.

use chrono::NaiveDate;

/// Required ISO date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, String> {
    if raw.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{field} must be in YYYY-MM-DD format"))
}

/// Required amount, strictly positive.
pub fn parse_positive_f64(raw: &str, field: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a number"))?;
    if value <= 0.0 {
        return Err(format!("{field} must be greater than 0"));
    }
    Ok(value)
}

/// Optional amount; blank parses to 0, negatives are rejected.
pub fn parse_f64_or_zero(raw: &str, field: &str) -> Result<f64, String> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a number"))?;
    if value < 0.0 {
        return Err(format!("{field} cannot be negative"));
    }
    Ok(value)
}

/// Required whole number, strictly positive.
pub fn parse_positive_u32(raw: &str, field: &str) -> Result<u32, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a whole number"))?;
    if value == 0 {
        return Err(format!("{field} must be greater than 0"));
    }
    Ok(value)
}

/// Optional whole number; blank parses to 0.
pub fn parse_u32_or_zero(raw: &str, field: &str) -> Result<u32, String> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    raw.trim()
        .parse()
        .map_err(|_| format!("{field} must be a whole number"))
}

/// Required non-blank text, trimmed.
pub fn require_text(raw: &str, field: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(trimmed.to_string())
}

/// Optional text: blank becomes `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Minimal shape check for email addresses; the directory only needs to
/// catch obvious typos, not enforce RFC 5322.
pub fn validate_email(raw: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("Please enter a valid email address".to_string());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_parse_or_name_the_field() {
        assert!(parse_date("2024-01-16", "Date").is_ok());
        assert_eq!(parse_date("", "Date").unwrap_err(), "Date is required");
        assert!(parse_date("16.01.2024", "Date").is_err());
    }

    #[test]
    fn positive_amounts_reject_zero_and_garbage() {
        assert_eq!(parse_positive_f64("12.5", "Amount").unwrap(), 12.5);
        assert!(parse_positive_f64("0", "Amount").is_err());
        assert!(parse_positive_f64("-3", "Amount").is_err());
        assert!(parse_positive_f64("twelve", "Amount").is_err());
    }

    #[test]
    fn zero_default_amounts_allow_blank_but_not_negative() {
        assert_eq!(parse_f64_or_zero("", "Deductions").unwrap(), 0.0);
        assert_eq!(parse_f64_or_zero("250", "Deductions").unwrap(), 250.0);
        assert!(parse_f64_or_zero("-1", "Deductions").is_err());
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(parse_positive_u32("26", "Units").unwrap(), 26);
        assert!(parse_positive_u32("0", "Units").is_err());
        assert_eq!(parse_u32_or_zero("", "Overtime hours").unwrap(), 0);
        assert!(parse_u32_or_zero("4.5", "Overtime hours").is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_email("jane.smith@dbrl.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("x@").is_err());
        assert!(validate_email("x@nodot").is_err());
        assert!(validate_email("x@dot.").is_err());
    }

    #[test]
    fn optional_text_trims_to_none() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" hi "), Some("hi".to_string()));
    }
}
