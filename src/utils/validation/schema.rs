//! Aggregate validation of one form submission.
//!
//! Composes the per-field rules of a form into a single closed validator,
//! applies it to one raw answer set, drops the empty answers and refuses a
//! submission with nothing left. The validator is rebuilt from the field
//! list on every call and holds no state across requests.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::models::{AnswerValue, Field};
use crate::utils::validation::{FieldRule, ValidationError};

/// The composed validator for all fields of one form.
///
/// Accepts only answer sets whose keys are drawn from the form's declared
/// field names; a field left out of the submission is validated as absent.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    // One rule per declared field, in the form's declared order
    rules: Vec<FieldRule>,
}

impl ResponseSchema {
    /// Builds the aggregate rule from a form's field list.
    pub fn build(fields: &[Field]) -> Self {
        Self {
            rules: fields.iter().map(FieldRule::for_field).collect(),
        }
    }

    /// Validates one raw answer set against the schema.
    ///
    /// Fails atomically on the first violation: an undeclared key, a value
    /// that does not match its field's rule, or a submission left empty
    /// once unanswered and empty-string values are dropped.
    pub fn validate(
        &self,
        raw_answers: &Map<String, Value>,
    ) -> Result<HashMap<String, AnswerValue>, ValidationError> {
        // Closed validation: every submitted key must name a declared field
        if let Some(key) = raw_answers.keys().find(|key| !self.declares(key.as_str())) {
            return Err(ValidationError::UnknownField { field: key.clone() });
        }

        let mut answers = HashMap::new();
        for rule in &self.rules {
            if let Some(value) = rule.check(raw_answers.get(rule.name()))? {
                // An optional text field answered with "" passes its rule
                // but carries no answer; it is dropped like a missing key
                if matches!(&value, AnswerValue::Text(s) if s.is_empty()) {
                    continue;
                }
                answers.insert(rule.name().to_string(), value);
            }
        }

        // A submission where nothing was answered is never accepted, even
        // when every individual field is optional
        if answers.is_empty() {
            return Err(ValidationError::EmptySubmission);
        }

        Ok(answers)
    }

    fn declares(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name() == name)
    }
}

/// Validates one submission in a single pass: build the form's aggregate
/// rule, apply it to the raw answers, filter out the empty ones and refuse
/// an empty result.
pub fn validate_submission(
    fields: &[Field],
    raw_answers: &Map<String, Value>,
) -> Result<HashMap<String, AnswerValue>, ValidationError> {
    ResponseSchema::build(fields).validate(raw_answers)
}
