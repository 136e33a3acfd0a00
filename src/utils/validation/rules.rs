//! Per-field validation rules.
//!
//! Maps the declared type of a single form field to the primitive rule
//! applied to one submitted value. Each rule is closed over its field's
//! name and label so that failures can be reported in terms the form
//! author chose.

use serde_json::Value;
use validator::ValidateEmail;

use crate::models::{AnswerValue, Field, FieldType};
use crate::utils::validation::ValidationError;

/// The primitive shape a submitted value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueRule {
    Email,
    Number,
    Boolean,
    Text,
}

/// The validation rule for a single field.
///
/// Built once per submission from the field definition and discarded
/// afterwards; holds no state beyond the field's own metadata.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
    label: String,
    required: bool,
    rule: ValueRule,
}

impl FieldRule {
    /// Derives the rule for one field from its declared type.
    ///
    /// `email`, `number` and `checkbox` get dedicated shapes; every other
    /// type (`text`, `select`) is validated as plain text. A `select`
    /// answer is not checked against the field's options list.
    pub fn for_field(field: &Field) -> Self {
        let rule = match field.field_type {
            FieldType::Email => ValueRule::Email,
            FieldType::Number => ValueRule::Number,
            FieldType::Checkbox => ValueRule::Boolean,
            FieldType::Text | FieldType::Select => ValueRule::Text,
        };

        Self {
            name: field.name.clone(),
            label: field.display_label().to_string(),
            required: field.required,
            rule,
        }
    }

    /// Name of the field this rule validates.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks one submitted value against the rule.
    ///
    /// A key absent from the submission is passed as `None`. On success the
    /// value is returned as a typed [`AnswerValue`], or `None` when an
    /// optional field was left unanswered.
    pub fn check(&self, value: Option<&Value>) -> Result<Option<AnswerValue>, ValidationError> {
        // Required fields reject missing, null and empty-string answers
        // before any shape check, so an empty answer is reported as
        // "required" rather than as a type mismatch.
        if self.required && is_empty(value) {
            return Err(ValidationError::RequiredField {
                label: self.label.clone(),
            });
        }

        let value = match value {
            // Optional and unanswered: passes, dropped later
            None => return Ok(None),
            Some(value) => value,
        };

        match (self.rule, value) {
            (ValueRule::Email, Value::String(s)) => {
                if s.validate_email() {
                    Ok(Some(AnswerValue::Text(s.clone())))
                } else {
                    Err(self.type_error("a valid email address"))
                }
            }
            (ValueRule::Email, _) => Err(self.type_error("a valid email address")),

            (ValueRule::Number, Value::Number(n)) => match n.as_f64() {
                Some(n) => Ok(Some(AnswerValue::Number(n))),
                None => Err(self.type_error("a number")),
            },
            (ValueRule::Number, _) => Err(self.type_error("a number")),

            (ValueRule::Boolean, Value::Bool(b)) => Ok(Some(AnswerValue::Bool(*b))),
            (ValueRule::Boolean, _) => Err(self.type_error("a boolean")),

            (ValueRule::Text, Value::String(s)) => Ok(Some(AnswerValue::Text(s.clone()))),
            (ValueRule::Text, _) => Err(self.type_error("a string")),
        }
    }

    fn type_error(&self, expected: &'static str) -> ValidationError {
        ValidationError::FieldType {
            field: self.name.clone(),
            expected,
        }
    }
}

/// An answer counts as empty when the key is absent, the value is null,
/// or the value is an empty string.
fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str, field_type: FieldType, required: bool) -> Field {
        Field {
            name: name.to_string(),
            field_type,
            label: None,
            required,
            validation: None,
        }
    }

    #[test]
    fn test_number_rule() {
        let rule = FieldRule::for_field(&field("age", FieldType::Number, false));

        let valid_values = vec![json!(0), json!(42), json!(-7), json!(3.25)];
        for value in valid_values {
            let result = rule.check(Some(&value));
            assert!(result.is_ok(), "Should accept numeric value: {}", value);
        }

        let invalid_values = vec![json!("42"), json!(true), json!([1, 2]), json!({})];
        for value in invalid_values {
            let result = rule.check(Some(&value));
            assert_eq!(
                result,
                Err(ValidationError::FieldType {
                    field: "age".to_string(),
                    expected: "a number",
                }),
                "Should reject non-numeric value: {}",
                value
            );
        }
    }

    #[test]
    fn test_checkbox_rule() {
        let rule = FieldRule::for_field(&field("agree", FieldType::Checkbox, true));

        // false is a real answer, not an empty one
        let checked = rule.check(Some(&json!(false))).unwrap();
        assert_eq!(checked, Some(AnswerValue::Bool(false)));

        let invalid_values = vec![json!("true"), json!(1), json!("")];
        for value in invalid_values {
            let result = rule.check(Some(&value));
            assert!(result.is_err(), "Should reject non-boolean value: {}", value);
        }

        // A required checkbox with no answer at all must still fail
        assert_eq!(
            rule.check(None),
            Err(ValidationError::RequiredField {
                label: "agree".to_string(),
            })
        );
    }

    #[test]
    fn test_email_rule() {
        let rule = FieldRule::for_field(&field("email", FieldType::Email, false));

        let valid = rule.check(Some(&json!("user@example.com"))).unwrap();
        assert_eq!(
            valid,
            Some(AnswerValue::Text("user@example.com".to_string()))
        );

        let invalid_values = vec![
            json!("not-an-email"),
            json!("@example.com"),
            json!("user@"),
            json!(42),
        ];
        for value in invalid_values {
            let result = rule.check(Some(&value));
            assert_eq!(
                result,
                Err(ValidationError::FieldType {
                    field: "email".to_string(),
                    expected: "a valid email address",
                }),
                "Should reject invalid email: {}",
                value
            );
        }
    }

    #[test]
    fn test_text_rule_covers_text_and_select() {
        for field_type in [FieldType::Text, FieldType::Select] {
            let rule = FieldRule::for_field(&field("color", field_type, false));

            let result = rule.check(Some(&json!("blue"))).unwrap();
            assert_eq!(result, Some(AnswerValue::Text("blue".to_string())));

            assert!(rule.check(Some(&json!(3))).is_err());
            assert!(rule.check(Some(&json!(null))).is_err());
        }
    }

    #[test]
    fn test_required_rejects_empty_answers() {
        let rule = FieldRule::for_field(&field("name", FieldType::Text, true));

        let empty_values = vec![None, Some(json!(null)), Some(json!(""))];
        for value in empty_values {
            let result = rule.check(value.as_ref());
            assert_eq!(
                result,
                Err(ValidationError::RequiredField {
                    label: "name".to_string(),
                }),
                "Should reject empty answer: {:?}",
                value
            );
        }
    }

    #[test]
    fn test_required_message_prefers_label() {
        let mut with_label = field("email", FieldType::Email, true);
        with_label.label = Some("Work address".to_string());

        let rule = FieldRule::for_field(&with_label);
        let err = rule.check(None).unwrap_err();
        assert_eq!(err.to_string(), "Work address is required");
    }

    #[test]
    fn test_optional_field_accepts_missing_answer() {
        let rule = FieldRule::for_field(&field("age", FieldType::Number, false));
        assert_eq!(rule.check(None), Ok(None));
    }

    #[test]
    fn test_optional_field_still_rejects_null() {
        let rule = FieldRule::for_field(&field("age", FieldType::Number, false));
        assert!(rule.check(Some(&json!(null))).is_err());
    }
}
