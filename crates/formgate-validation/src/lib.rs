//! Formgate Validation Core
//!
//! Pure validation functions shared by every form in the workspace.
//! Each function is a pure predicate over the raw input string: same
//! input, same result, no hidden state.
//!
//! Failures carry a user-facing message, so `Result<(), String>` doubles
//! as the inline error text a form renders next to the field.

pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
