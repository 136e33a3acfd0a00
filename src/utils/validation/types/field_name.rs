//! Represents a validated field name.
//!
//! Field names key the answers of every future submission, so they are
//! restricted to a conservative identifier shape: a letter followed by
//! letters, digits or underscores.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::utils::validation::MAX_FIELD_NAME_LENGTH;

// Regex for field names; the length cap is enforced separately so the
// error message can mention it
static FIELD_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$")
        .expect("Failed to compile field name regex")
});

/// A field name that is guaranteed to be a well-formed identifier.
/// Can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName {
    name: String,
}

impl FieldName {
    /// Creates a new `FieldName` after validating the provided string.
    ///
    /// # Arguments
    /// * `name` - The raw field name to validate
    ///
    /// # Returns
    /// * `Ok(FieldName)` if the name is a valid identifier
    /// * `Err` with a descriptive message if validation fails
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            bail!("Field name cannot be empty");
        }

        if trimmed.len() > MAX_FIELD_NAME_LENGTH {
            bail!(
                "Field name exceeds maximum length of {} characters",
                MAX_FIELD_NAME_LENGTH
            );
        }

        if !FIELD_NAME_REGEX.is_match(trimmed) {
            bail!("Field name must start with a letter and contain only letters, digits or underscores");
        }

        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Returns a string slice of the validated field name
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Implements Display to allow printing the field name
impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Allows using FieldName wherever a string reference is needed
impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_field_names() {
        let valid_names = vec![
            "email",
            "first_name",
            "q1",
            "Agree2Terms",
            "  padded  ",  // Should be trimmed
        ];

        for name in valid_names {
            let result = FieldName::new(name);
            assert!(result.is_ok(), "Should accept valid field name: {}", name);
        }
    }

    #[test]
    fn test_invalid_field_names() {
        let binding = "a".repeat(MAX_FIELD_NAME_LENGTH + 1);
        let invalid_names = vec![
            "",  // Empty
            "   ",  // Only whitespace
            "1st_field",  // Starts with a digit
            "_hidden",  // Starts with an underscore
            "first name",  // Contains a space
            "email@",  // Invalid character
            &binding,  // Too long
        ];

        for name in invalid_names {
            let result = FieldName::new(name);
            assert!(result.is_err(), "Should reject invalid field name: {}", name);
        }
    }

    #[test]
    fn test_display_and_asref() {
        let name = FieldName::new("email").unwrap();

        assert_eq!(format!("{}", name), "email");

        let reference: &str = name.as_ref();
        assert_eq!(reference, "email");
    }
}
