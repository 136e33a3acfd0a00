//! Failure modes of submission validation.
//!
//! Every variant is a deterministic, request-local rejection. None of them
//! is fatal to the process; the HTTP layer translates each into a client
//! visible message and never retries.

use thiserror::Error;

/// A rejected submission, identifying what was wrong with it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The submission contains a key that no field of the form declares.
    #[error("the input contains keys not defined in the schema: {field}")]
    UnknownField { field: String },

    /// A submitted value does not have the shape its field declares.
    #[error("{field} must be {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// A required field was left missing, null or empty.
    #[error("{label} is required")]
    RequiredField { label: String },

    /// Nothing meaningful was answered once empty values are dropped.
    #[error("answers cannot be empty")]
    EmptySubmission,
}
