//! Password strength validation

/// Minimum password length required by [`validate_password`].
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Outcome of the four independent password sub-checks.
///
/// Each flag is reportable on its own so a UI can show partial progress
/// while the user types, instead of a single pass/fail verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecks {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
}

impl PasswordChecks {
    /// All four requirements satisfied.
    pub fn all_met(&self) -> bool {
        self.has_min_length && self.has_uppercase && self.has_lowercase && self.has_digit
    }

    /// Labels for the requirements still missing, in display order.
    pub fn unmet(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_min_length {
            missing.push("At least 8 characters");
        }
        if !self.has_uppercase {
            missing.push("One uppercase letter");
        }
        if !self.has_lowercase {
            missing.push("One lowercase letter");
        }
        if !self.has_digit {
            missing.push("One number");
        }
        missing
    }
}

/// Runs the four sub-checks without short-circuiting.
pub fn password_checks(password: &str) -> PasswordChecks {
    PasswordChecks {
        has_min_length: password.len() >= PASSWORD_MIN_LENGTH,
        has_uppercase: password.chars().any(|c| c.is_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_lowercase()),
        has_digit: password.chars().any(|c| c.is_numeric()),
    }
}

/// Validates password strength: 8+ chars with uppercase, lowercase, and digit.
/// Reports the first failing requirement.
pub fn validate_password(password: &str) -> Result<(), String> {
    let checks = [
        (
            password.len() >= PASSWORD_MIN_LENGTH,
            "Password must be at least 8 characters",
        ),
        (
            password.chars().any(|c| c.is_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_numeric()),
            "Password must contain at least one digit",
        ),
    ];

    checks
        .iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| Err(msg.to_string()))
        .unwrap_or(Ok(()))
}
