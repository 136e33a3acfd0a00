//! Root module for the validation system.
//! Exposes the public API for form-authoring validation and for the
//! per-submission response validator.

mod constants;
mod error;
mod rules;
mod schema;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::ValidationError;
pub use rules::FieldRule;
pub use schema::{validate_submission, ResponseSchema};
pub use types::{FieldName, TextInput};
