// File: src/form.rs
// Purpose: Form state, touch tracking, and validity derivation

use crate::field::{FieldDisplay, FieldSpec};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// When validation errors become visible to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPolicy {
    /// Errors show only after the user has touched the field (blur or a
    /// submit attempt). This is the registration-form behavior.
    #[default]
    TouchGated,
    /// Errors show as soon as the field has received a change event, no
    /// blur needed. This is the comment-form behavior.
    Immediate,
}

/// Immutable copy of all field values taken at a successful submission
/// instant, passed onward to the external submit collaborator.
///
/// Serializes as a flat `{ field: value }` JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot(BTreeMap<String, String>);

impl FormSnapshot {
    /// Value of a field at the snapshot instant.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    /// All `(field, value)` pairs, sorted by field name.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields captured.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Per-field raw values, touch tracking, and derived validity over a
/// fixed set of declared fields.
///
/// The key sets of the value map, the touch map, and the spec collection
/// are identical and fixed at construction. Referencing an undeclared
/// field is a wiring bug and panics rather than being handled.
pub struct FormValidator {
    specs: Vec<FieldSpec>,
    values: HashMap<String, String>,
    touched: HashMap<String, bool>,
    edited: HashMap<String, bool>,
    policy: DisplayPolicy,
}

impl FormValidator {
    /// Build a validator over a fixed set of fields with the default
    /// touch-gated display policy. Every field starts empty and untouched.
    ///
    /// # Panics
    ///
    /// Panics if two specs share a name.
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self::with_policy(specs, DisplayPolicy::TouchGated)
    }

    /// Build a validator with an explicit display policy.
    ///
    /// # Panics
    ///
    /// Panics if two specs share a name.
    pub fn with_policy(specs: Vec<FieldSpec>, policy: DisplayPolicy) -> Self {
        let mut values = HashMap::new();
        let mut touched = HashMap::new();
        let mut edited = HashMap::new();
        for spec in &specs {
            let previous = values.insert(spec.name().to_string(), String::new());
            assert!(
                previous.is_none(),
                "duplicate field declaration: {}",
                spec.name()
            );
            touched.insert(spec.name().to_string(), false);
            edited.insert(spec.name().to_string(), false);
        }
        Self {
            specs,
            values,
            touched,
            edited,
            policy,
        }
    }

    /// Update a field's raw value. Touch state is unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `field` was not declared.
    pub fn set_value(&mut self, field: &str, raw: impl Into<String>) {
        let raw = raw.into();
        tracing::debug!("Field {} changed to {:?}", field, raw);
        let slot = self
            .values
            .get_mut(field)
            .unwrap_or_else(|| panic!("undeclared field: {}", field));
        *slot = raw;
        if let Some(flag) = self.edited.get_mut(field) {
            *flag = true;
        }
    }

    /// Mark a field as touched (the user focused and left it). Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `field` was not declared.
    pub fn mark_touched(&mut self, field: &str) {
        let slot = self
            .touched
            .get_mut(field)
            .unwrap_or_else(|| panic!("undeclared field: {}", field));
        *slot = true;
    }

    /// Current validity of a field, derived purely from its raw value.
    ///
    /// # Panics
    ///
    /// Panics if `field` was not declared.
    pub fn validity(&self, field: &str) -> Result<(), String> {
        self.spec(field).check(self.value(field))
    }

    /// Raw value of a field.
    ///
    /// # Panics
    ///
    /// Panics if `field` was not declared.
    pub fn value(&self, field: &str) -> &str {
        self.values
            .get(field)
            .map(|s| s.as_str())
            .unwrap_or_else(|| panic!("undeclared field: {}", field))
    }

    /// Whether the user has touched (blurred) the field or attempted a
    /// submit since the last reset.
    ///
    /// # Panics
    ///
    /// Panics if `field` was not declared.
    pub fn is_touched(&self, field: &str) -> bool {
        *self
            .touched
            .get(field)
            .unwrap_or_else(|| panic!("undeclared field: {}", field))
    }

    /// True iff the field should render its error state right now.
    ///
    /// Under [`DisplayPolicy::TouchGated`] an invalid-but-untouched field
    /// stays quiet; under [`DisplayPolicy::Immediate`] the error shows as
    /// soon as the field has seen a change event.
    pub fn is_visibly_invalid(&self, field: &str) -> bool {
        self.feedback_shown(field) && self.validity(field).is_err()
    }

    /// Full display state for a field: neutral, affirmative, or error with
    /// the reason text.
    pub fn display(&self, field: &str) -> FieldDisplay {
        if !self.feedback_shown(field) {
            return FieldDisplay::Neutral;
        }
        match self.validity(field) {
            Ok(()) => FieldDisplay::Valid,
            Err(reason) => FieldDisplay::Invalid(reason),
        }
    }

    fn feedback_shown(&self, field: &str) -> bool {
        match self.policy {
            DisplayPolicy::TouchGated => self.is_touched(field),
            DisplayPolicy::Immediate => {
                self.is_touched(field)
                    || *self
                        .edited
                        .get(field)
                        .unwrap_or_else(|| panic!("undeclared field: {}", field))
            }
        }
    }

    /// True iff every declared field is currently valid.
    pub fn is_form_valid(&self) -> bool {
        self.specs
            .iter()
            .all(|spec| spec.check(self.value(spec.name())).is_ok())
    }

    /// Validate every field, collecting reasons by field name.
    pub fn validate_all(&self) -> Result<(), HashMap<String, String>> {
        let mut errors = HashMap::new();
        for spec in &self.specs {
            if let Err(reason) = spec.check(self.value(spec.name())) {
                errors.insert(spec.name().to_string(), reason);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Mark every field touched and return a snapshot iff the whole form
    /// is valid. Does not reset anything; both submission paths build on
    /// this primitive.
    pub fn snapshot_if_valid(&mut self) -> Option<FormSnapshot> {
        self.mark_all_touched();
        if self.is_form_valid() {
            Some(self.snapshot())
        } else {
            None
        }
    }

    fn mark_all_touched(&mut self) {
        for flag in self.touched.values_mut() {
            *flag = true;
        }
        for flag in self.edited.values_mut() {
            *flag = true;
        }
    }

    /// Copy of the current values.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Attempt a submission.
    ///
    /// Every field is marked touched. If the whole form is valid,
    /// `on_valid` receives a snapshot of the values, the form resets to
    /// its initial state, and `true` is returned. Otherwise the callback
    /// is not invoked, values are left in place with the invalid fields
    /// now visibly flagged, and `false` is returned.
    pub fn submit(&mut self, on_valid: impl FnOnce(FormSnapshot)) -> bool {
        match self.snapshot_if_valid() {
            Some(snapshot) => {
                on_valid(snapshot);
                self.reset();
                true
            }
            None => false,
        }
    }

    /// Restore every field to its initial empty value and clear all
    /// interaction tracking.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        for flag in self.touched.values_mut() {
            *flag = false;
        }
        for flag in self.edited.values_mut() {
            *flag = false;
        }
    }

    /// Declared field names in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name()).collect()
    }

    /// The display policy fixed at construction.
    pub fn policy(&self) -> DisplayPolicy {
        self.policy
    }

    fn spec(&self, field: &str) -> &FieldSpec {
        self.specs
            .iter()
            .find(|spec| spec.name() == field)
            .unwrap_or_else(|| panic!("undeclared field: {}", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_field_form() -> FormValidator {
        FormValidator::new(vec![
            FieldSpec::new("name", |raw: &str| {
                if raw.trim().len() >= 2 {
                    Ok(())
                } else {
                    Err("Name must be at least 2 characters".to_string())
                }
            }),
            FieldSpec::new("email", |raw: &str| {
                if raw.contains('@') {
                    Ok(())
                } else {
                    Err("Invalid email format".to_string())
                }
            }),
        ])
    }

    #[test]
    fn test_validity_is_pure() {
        let mut form = two_field_form();
        form.set_value("email", "bad");
        let first = form.validity("email");
        let second = form.validity("email");
        assert_eq!(first, second);
        assert_eq!(first.unwrap_err(), "Invalid email format");
    }

    #[test]
    fn test_untouched_fields_show_no_error() {
        let mut form = two_field_form();
        form.set_value("email", "bad");

        assert!(form.validity("email").is_err());
        assert!(!form.is_visibly_invalid("email"));
        assert_eq!(form.display("email"), FieldDisplay::Neutral);

        form.mark_touched("email");
        assert!(form.is_visibly_invalid("email"));
        assert_eq!(
            form.display("email"),
            FieldDisplay::Invalid("Invalid email format".to_string())
        );
    }

    #[test]
    fn test_touched_valid_field_is_affirmative() {
        let mut form = two_field_form();
        form.set_value("name", "Jo");
        form.mark_touched("name");
        assert_eq!(form.display("name"), FieldDisplay::Valid);
    }

    #[test]
    fn test_mark_touched_is_idempotent() {
        let mut form = two_field_form();
        form.mark_touched("name");
        let once = form.is_touched("name");
        form.mark_touched("name");
        assert_eq!(once, form.is_touched("name"));
        assert!(once);
    }

    #[test]
    fn test_set_value_does_not_touch() {
        let mut form = two_field_form();
        form.set_value("name", "Jo");
        assert!(!form.is_touched("name"));
    }

    #[test]
    fn test_failed_submit_touches_all_and_keeps_values() {
        let mut form = two_field_form();
        form.set_value("name", "Jo");
        form.set_value("email", "bad");

        let mut called = false;
        let proceeded = form.submit(|_| called = true);

        assert!(!proceeded);
        assert!(!called);
        assert!(form.is_touched("name"));
        assert!(form.is_touched("email"));
        assert_eq!(form.value("name"), "Jo");
        assert_eq!(form.value("email"), "bad");
        assert!(form.is_visibly_invalid("email"));
    }

    #[test]
    fn test_successful_submit_snapshots_then_resets() {
        let mut form = two_field_form();
        form.set_value("name", "Jo");
        form.set_value("email", "jo@example.com");
        form.mark_touched("name");

        let mut received = None;
        let proceeded = form.submit(|snapshot| received = Some(snapshot));

        assert!(proceeded);
        let snapshot = received.expect("callback should receive one snapshot");
        assert_eq!(snapshot.get("name"), Some("Jo"));
        assert_eq!(snapshot.get("email"), Some("jo@example.com"));
        assert_eq!(snapshot.len(), 2);

        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("email"), "");
        assert!(!form.is_touched("name"));
        assert!(!form.is_touched("email"));
    }

    #[test]
    fn test_validate_all_collects_reasons() {
        let mut form = two_field_form();
        form.set_value("email", "bad");

        let errors = form.validate_all().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("name"));
        assert_eq!(errors.get("email").unwrap(), "Invalid email format");

        form.set_value("name", "Jo");
        form.set_value("email", "jo@example.com");
        assert!(form.validate_all().is_ok());
    }

    #[test]
    fn test_immediate_policy_shows_errors_on_change() {
        let mut form = FormValidator::with_policy(
            vec![FieldSpec::new("comment", |raw: &str| {
                if raw.len() >= 10 {
                    Ok(())
                } else {
                    Err("Too short".to_string())
                }
            })],
            DisplayPolicy::Immediate,
        );

        // Nothing shows before the first change event.
        assert_eq!(form.display("comment"), FieldDisplay::Neutral);

        form.set_value("comment", "short");
        assert!(form.is_visibly_invalid("comment"));

        // Clearing the field keeps the error visible: the field was edited.
        form.set_value("comment", "");
        assert!(form.is_visibly_invalid("comment"));
    }

    #[test]
    fn test_field_names_keep_declaration_order() {
        let form = two_field_form();
        assert_eq!(form.field_names(), vec!["name", "email"]);
    }

    #[test]
    fn test_snapshot_serializes_as_flat_object() {
        let mut form = two_field_form();
        form.set_value("name", "Jo");
        form.set_value("email", "jo@example.com");

        let json = serde_json::to_value(form.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Jo", "email": "jo@example.com"})
        );
    }

    #[test]
    #[should_panic(expected = "undeclared field")]
    fn test_unknown_field_fails_fast() {
        let mut form = two_field_form();
        form.set_value("nickname", "oops");
    }

    #[test]
    #[should_panic(expected = "duplicate field declaration")]
    fn test_duplicate_declaration_fails_fast() {
        let _ = FormValidator::new(vec![
            FieldSpec::new("name", |_: &str| Ok(())),
            FieldSpec::new("name", |_: &str| Ok(())),
        ]);
    }
}
