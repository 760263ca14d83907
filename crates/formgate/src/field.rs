// File: src/field.rs
// Purpose: Field declarations and per-field display state

use std::fmt;

/// A pure validation rule over a field's raw string value.
///
/// `Ok(())` means valid; `Err` carries the user-facing reason.
pub type ValidationRule = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Declaration of a single form field: a stable name plus the rule used
/// to derive its validity.
///
/// Specs are defined at construction and immutable afterwards; the set of
/// specs given to a form fixes its key set for the form's whole life.
pub struct FieldSpec {
    name: &'static str,
    rule: ValidationRule,
}

impl FieldSpec {
    /// Declare a field with its validation rule.
    pub fn new(
        name: &'static str,
        rule: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            rule: Box::new(rule),
        }
    }

    /// The field's stable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn check(&self, raw: &str) -> Result<(), String> {
        (self.rule)(raw)
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec").field("name", &self.name).finish()
    }
}

/// Display state for a field: the touched × valid cross product.
///
/// Invalid-but-untouched fields render [`FieldDisplay::Neutral`] so errors
/// never flash during the first keystroke. The transient "submitting"
/// disable is tracked by the submission layer, not per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDisplay {
    /// No validation feedback yet.
    Neutral,
    /// Interacted with and valid: affirmative styling.
    Valid,
    /// Interacted with and invalid: error styling plus the reason text.
    Invalid(String),
}

impl FieldDisplay {
    /// True for the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, FieldDisplay::Invalid(_))
    }

    /// The error reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            FieldDisplay::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}
