//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Single-@ single-dot structural check. Intentionally not RFC-complete:
// the forms built on this accept anything shaped like local@domain.tld.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate email format
///
/// Checks for:
/// - Exactly one '@' symbol with content on both sides
/// - At least one '.' in the domain part
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// [`is_valid_email`] with the user-facing message attached.
pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}
