// File: src/catalog.rs
// Purpose: Typed input catalog with a single change handler and live state

use anyhow::Result;
use serde::Serialize;

/// The three value shapes a change event can carry, dispatched on by the
/// single handler: checkboxes report a flag, file pickers report the
/// chosen file's name, every other control reports a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ControlValue {
    Text(String),
    Toggle(bool),
    FileName(Option<String>),
}

impl ControlValue {
    pub fn text(value: impl Into<String>) -> Self {
        ControlValue::Text(value.into())
    }
}

/// The HTML input types the catalog showcases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    Text,
    Password,
    Email,
    Url,
    Tel,
    Search,
    Number,
    Range,
    Date,
    Time,
    DatetimeLocal,
    Month,
    Week,
    Checkbox,
    Radio,
    File,
    Color,
    Hidden,
}

/// One named control plus its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub name: &'static str,
    pub kind: ControlKind,
    pub value: ControlValue,
    #[serde(skip)]
    default_value: ControlValue,
}

impl ControlState {
    fn new(name: &'static str, kind: ControlKind, default_value: ControlValue) -> Self {
        Self {
            name,
            kind,
            value: default_value.clone(),
            default_value,
        }
    }
}

/// Declaration-ordered collection of every showcased input, with live
/// state that a UI would render next to the controls.
#[derive(Debug)]
pub struct InputCatalog {
    controls: Vec<ControlState>,
}

impl InputCatalog {
    /// The full catalog with the showcase defaults: range starts at its
    /// midpoint, color at red, and the hidden input carries a preset
    /// value the user never edits.
    pub fn standard() -> Self {
        use ControlKind::*;
        let text = |name, kind| ControlState::new(name, kind, ControlValue::text(""));
        Self {
            controls: vec![
                text("text", Text),
                text("password", Password),
                text("email", Email),
                text("url", Url),
                text("tel", Tel),
                text("search", Search),
                text("number", Number),
                ControlState::new("range", Range, ControlValue::text("50")),
                text("date", Date),
                text("time", Time),
                text("datetime-local", DatetimeLocal),
                text("month", Month),
                text("week", Week),
                ControlState::new("checkbox", Checkbox, ControlValue::Toggle(false)),
                text("radio", Radio),
                ControlState::new("file", File, ControlValue::FileName(None)),
                ControlState::new("color", Color, ControlValue::text("#ff0000")),
                ControlState::new("hidden", Hidden, ControlValue::text("secret-value-123")),
            ],
        }
    }

    /// The single change handler for every control.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a catalog control.
    pub fn apply(&mut self, name: &str, value: ControlValue) {
        tracing::debug!("Field {:?} changed: {:?}", name, value);
        let control = self
            .controls
            .iter_mut()
            .find(|control| control.name == name)
            .unwrap_or_else(|| panic!("unknown control: {}", name));
        control.value = value;
    }

    /// Current value of a control.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a catalog control.
    pub fn value(&self, name: &str) -> &ControlValue {
        self.controls
            .iter()
            .find(|control| control.name == name)
            .map(|control| &control.value)
            .unwrap_or_else(|| panic!("unknown control: {}", name))
    }

    /// Restore every control to its default.
    pub fn reset(&mut self) {
        for control in &mut self.controls {
            control.value = control.default_value.clone();
        }
    }

    pub fn controls(&self) -> &[ControlState] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// The live state display: all controls in declaration order as
    /// pretty-printed JSON.
    pub fn state_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.controls)?)
    }
}
