//! # formgate
//!
//! Touch-tracked form state with declarative per-field validation.
//!
//! A form is declared once as a fixed set of fields, each carrying a pure
//! validation rule. [`FormValidator`] owns the raw string values and the
//! touched flags, derives validity on demand, and gates submission on
//! full-form validity. Asynchronous submission is layered on top through
//! [`FormSession`], which drives an opaque [`SubmitSink`] and tracks the
//! submission state machine.
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate::{FieldSpec, FormValidator};
//!
//! let mut form = FormValidator::new(vec![
//!     FieldSpec::new("email", |raw: &str| {
//!         if raw.contains('@') {
//!             Ok(())
//!         } else {
//!             Err("Invalid email".to_string())
//!         }
//!     }),
//! ]);
//!
//! form.set_value("email", "user@example.com");
//! assert!(form.is_form_valid());
//!
//! let mut submitted = None;
//! assert!(form.submit(|snapshot| submitted = Some(snapshot)));
//! assert_eq!(form.value("email"), "");
//! ```
//!
//! ## Architecture
//!
//! - [`field`] - field declarations and the per-field display states
//! - [`form`] - value/touch maps, validity derivation, submit/reset lifecycle
//! - [`submit`] - the submission state machine over an async sink
//!
//! Validation rules are plain `Fn(&str) -> Result<(), String>`; the
//! companion `formgate-validation` crate provides the standard ones
//! (length, email, URL, numeric range, password strength).

pub mod field;
pub mod form;
pub mod submit;

// Re-export core types
pub use field::{FieldDisplay, FieldSpec};
pub use form::{DisplayPolicy, FormSnapshot, FormValidator};
pub use submit::{FormSession, SubmitSink, SubmitState};
