// File: src/forms.rs
// Purpose: The demo's form presets, built from the standard rules

use formgate::{DisplayPolicy, FieldSpec, FormValidator};
use formgate_validation::{
    validate_email, validate_http_url, validate_integer_range, validate_password,
    validate_required_text, validate_url,
};

/// Upper length bound for the comment field, also used by the live
/// character counter.
pub const COMMENT_MAX_LEN: usize = 500;

/// The registration form: five fields, errors shown after blur.
pub fn registration_form() -> FormValidator {
    FormValidator::new(vec![
        FieldSpec::new("name", |raw: &str| {
            validate_required_text(raw, 2, 50)
                .map_err(|_| "Name must be 2-50 characters".to_string())
        }),
        FieldSpec::new("email", validate_email),
        FieldSpec::new("age", |raw: &str| {
            validate_integer_range(raw, 13, 120)
                .map_err(|_| "Age must be between 13 and 120".to_string())
        }),
        FieldSpec::new("website", |raw: &str| {
            validate_http_url(raw)
                .map_err(|_| "Please enter a valid URL starting with http:// or https://".to_string())
        }),
        FieldSpec::new("password", validate_password),
    ])
}

/// The comment form: errors shown as the user types, no blur needed.
pub fn comment_form() -> FormValidator {
    FormValidator::with_policy(
        vec![
            FieldSpec::new("name", |raw: &str| {
                validate_required_text(raw, 2, 50)
                    .map_err(|_| "Name must be 2-50 characters".to_string())
            }),
            FieldSpec::new("email", validate_email),
            FieldSpec::new("website", |raw: &str| {
                if raw.trim().is_empty() {
                    return Err("URL is required".to_string());
                }
                validate_url(raw)
                    .map_err(|_| "Please enter a valid URL (e.g., https://example.com)".to_string())
            }),
            FieldSpec::new("comment", |raw: &str| {
                validate_required_text(raw, 10, COMMENT_MAX_LEN)
                    .map_err(|_| format!("Comment must be 10-{} characters", COMMENT_MAX_LEN))
            }),
        ],
        DisplayPolicy::Immediate,
    )
}
