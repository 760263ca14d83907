// File: src/submit.rs
// Purpose: Submission state machine over an opaque async sink

use crate::form::{FormSnapshot, FormValidator};
use async_trait::async_trait;

/// Lifecycle of a submission attempt.
///
/// Exactly one state holds at a time. `Succeeded` and `Failed` carry the
/// banner text to show the user; a new attempt replaces either terminal
/// state, so banners never stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// No attempt in flight and no banner to show.
    #[default]
    Idle,
    /// An attempt is in flight; inputs should be disabled.
    Submitting,
    /// The last attempt succeeded, with the success message.
    Succeeded(String),
    /// The last attempt failed, with the error message.
    Failed(String),
}

impl SubmitState {
    /// True while an attempt is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Banner text for the terminal states, if any.
    pub fn banner(&self) -> Option<&str> {
        match self {
            SubmitState::Succeeded(msg) | SubmitState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Destination for validated form data.
///
/// The session hands a snapshot to the sink and maps the outcome onto
/// [`SubmitState`]: `Ok` carries the success message, `Err` the failure
/// reason shown to the user.
#[async_trait]
pub trait SubmitSink: Send + Sync {
    async fn submit(&self, snapshot: &FormSnapshot) -> anyhow::Result<String>;
}

/// A form paired with a sink and the submission state machine.
///
/// Local validation failures never reach the sink. A sink failure keeps
/// the entered values so the user can retry; only a sink success resets
/// the form.
pub struct FormSession<S: SubmitSink> {
    form: FormValidator,
    sink: S,
    state: SubmitState,
}

impl<S: SubmitSink> FormSession<S> {
    pub fn new(form: FormValidator, sink: S) -> Self {
        Self {
            form,
            sink,
            state: SubmitState::Idle,
        }
    }

    /// The underlying form, for reads.
    pub fn form(&self) -> &FormValidator {
        &self.form
    }

    /// The underlying form, for value and touch updates.
    pub fn form_mut(&mut self) -> &mut FormValidator {
        &mut self.form
    }

    /// Current submission state.
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// True while inputs should be disabled.
    pub fn inputs_disabled(&self) -> bool {
        self.state.is_submitting()
    }

    /// Drive one submission attempt through the sink.
    ///
    /// Ignored while an attempt is already in flight. Otherwise every
    /// field is marked touched; if any field is invalid the state moves
    /// to `Failed` without contacting the sink. On a sink success the
    /// form resets and the state is `Succeeded`; on a sink failure the
    /// values stay put and the state is `Failed`.
    pub async fn submit(&mut self) -> &SubmitState {
        if self.state.is_submitting() {
            tracing::debug!("Submit ignored: attempt already in flight");
            return &self.state;
        }

        let snapshot = match self.form.snapshot_if_valid() {
            Some(snapshot) => snapshot,
            None => {
                tracing::warn!("Submit blocked by validation errors");
                self.state = SubmitState::Failed(
                    "Please fix all validation errors before submitting".to_string(),
                );
                return &self.state;
            }
        };

        self.state = SubmitState::Submitting;
        tracing::info!("Submitting {} fields", snapshot.len());

        match self.sink.submit(&snapshot).await {
            Ok(message) => {
                tracing::info!("Submission succeeded: {}", message);
                self.form.reset();
                self.state = SubmitState::Succeeded(message);
            }
            Err(err) => {
                tracing::warn!("Submission failed: {}", err);
                self.state = SubmitState::Failed(err.to_string());
            }
        }
        &self.state
    }
}
