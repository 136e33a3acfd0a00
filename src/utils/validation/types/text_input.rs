//! Provides a validated representation of form-authoring text.
//!
//! Titles, descriptions and field labels are written once by the form
//! author and rendered back to every submitter, so they are held to
//! stricter requirements than submitted answers:
//! - Length constraints per kind of text
//! - No control characters
//! - No embedded HTML
//! - Normalized Unicode representation

use ammonia::is_html;
use anyhow::{bail, Context, Result};
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use validator::ValidateNonControlCharacter;

use crate::utils::validation::{MAX_DESCRIPTION_LENGTH, MAX_LABEL_LENGTH};

/// A piece of authored text that is guaranteed to be safe to store and
/// render. Can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextInput {
    // The validated and normalized text
    text: String,
}

impl TextInput {
    /// Validates a form title.
    ///
    /// # Arguments
    /// * `title` - The raw title to validate
    pub fn title(title: &str) -> Result<Self> {
        Self::new(title, MAX_LABEL_LENGTH).context("Invalid form title")
    }

    /// Validates a form description. Descriptions may run longer than
    /// titles and labels.
    ///
    /// # Arguments
    /// * `description` - The raw description to validate
    pub fn description(description: &str) -> Result<Self> {
        Self::new(description, MAX_DESCRIPTION_LENGTH).context("Invalid form description")
    }

    /// Validates a field label, shown to submitters and echoed in
    /// validation error messages.
    ///
    /// # Arguments
    /// * `label` - The raw label to validate
    pub fn label(label: &str) -> Result<Self> {
        Self::new(label, MAX_LABEL_LENGTH).context("Invalid field label")
    }

    /// Internal function that performs the actual validation and creation.
    /// This keeps the rules identical across the different kinds of text.
    fn new(content: &str, max_length: usize) -> Result<Self> {
        // First, normalize whitespace by trimming
        let trimmed = content.trim();

        if trimmed.is_empty() {
            bail!("Text cannot be empty");
        }

        if trimmed.len() > max_length {
            bail!("Text exceeds maximum length of {} characters", max_length);
        }

        if !trimmed.validate_non_control_character() {
            bail!("Text contains invalid control characters");
        }

        if is_html(trimmed) {
            bail!("Text cannot contain HTML");
        }

        // Normalize Unicode characters to ensure consistent representation
        let normalized = trimmed.nfkc().collect::<String>();

        Ok(Self { text: normalized })
    }

    /// Returns the validated text as a string slice
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Implements Display to allow printing the validated text
impl fmt::Display for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Allows using TextInput wherever a string reference is needed
impl AsRef<str> for TextInput {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
