//! String and URL validation functions

/// Validates that a value is non-empty after trimming.
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.len() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.len() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    if s.len() >= min && s.len() <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {} characters", min, max))
    }
}

/// Required free text: non-empty, with the trimmed length within [min, max].
pub fn validate_required_text(s: &str, min: usize, max: usize) -> Result<(), String> {
    validate_required(s)?;
    validate_length(s.trim(), min, max)
}

/// URL validation: the value must parse as an absolute URL.
///
/// Deliberately loose; any scheme passes. Use [`validate_http_url`] when
/// only web URLs are acceptable.
pub fn validate_url(s: &str) -> Result<(), String> {
    match url::Url::parse(s) {
        Ok(_) => Ok(()),
        Err(_) => Err("Must be a valid URL".to_string()),
    }
}

/// URL validation restricted to the http/https schemes.
pub fn validate_http_url(s: &str) -> Result<(), String> {
    let parsed = url::Url::parse(s).map_err(|_| "Must be a valid URL".to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err("URL must start with http:// or https://".to_string()),
    }
}
