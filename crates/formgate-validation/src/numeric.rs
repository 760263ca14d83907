//! Numeric validation functions

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + std::fmt::Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Validates value is within range
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
) -> Result<(), String> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {}", min, max))
    }
}

/// Parses a raw input as an integer and checks it against [min, max].
///
/// Parse failure and out-of-range are both invalid; the raw value is
/// trimmed first so padded input like `" 42 "` still counts.
pub fn validate_integer_range(raw: &str, min: i64, max: i64) -> Result<(), String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Must be a whole number".to_string())?;
    validate_range(value, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_validation() {
        assert!(validate_min(10, 5).is_ok());
        assert!(validate_min(5, 5).is_ok());
        assert!(validate_min(3, 5).is_err());
    }

    #[test]
    fn test_max_validation() {
        assert!(validate_max(5, 10).is_ok());
        assert!(validate_max(10, 10).is_ok());
        assert!(validate_max(15, 10).is_err());
    }

    #[test]
    fn test_range_validation() {
        assert!(validate_range(5, 1, 10).is_ok());
        assert!(validate_range(1, 1, 10).is_ok());
        assert!(validate_range(10, 1, 10).is_ok());
        assert!(validate_range(0, 1, 10).is_err());
        assert!(validate_range(11, 1, 10).is_err());
    }

    #[test]
    fn test_integer_range_age_bounds() {
        assert!(validate_integer_range("13", 13, 120).is_ok());
        assert!(validate_integer_range("120", 13, 120).is_ok());
        assert!(validate_integer_range("12", 13, 120).is_err());
        assert!(validate_integer_range("121", 13, 120).is_err());
        assert!(validate_integer_range("abc", 13, 120).is_err());
        assert!(validate_integer_range("", 13, 120).is_err());
        assert!(validate_integer_range(" 42 ", 13, 120).is_ok());
    }
}
