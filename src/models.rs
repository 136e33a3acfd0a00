//! Modèle de données: formulaires, champs typés et réponses soumises.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Le type déclaré d'un champ de formulaire.
///
/// L'ensemble est fermé: une valeur inconnue est rejetée dès la
/// désérialisation du formulaire.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Checkbox,
    Select,
}

/// Un champ typé d'un formulaire, identifié par son nom.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Contraintes supplémentaires, stockées telles quelles sans être interprétées
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<HashMap<String, serde_json::Value>>,
}

impl Field {
    /// Libellé utilisé dans les messages d'erreur, avec repli sur le nom du champ.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Un formulaire: un titre et une suite ordonnée de champs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Form {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// Une valeur validée soumise pour un champ.
///
/// L'absence de valeur n'est pas représentée ici: un champ sans réponse
/// n'apparaît simplement pas dans l'ensemble des réponses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Une réponse enregistrée pour un formulaire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormResponse {
    pub id: Uuid,
    pub form_id: Uuid,
    pub answers: HashMap<String, AnswerValue>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_uses_lowercase_names() {
        let json = serde_json::to_string(&FieldType::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");

        let parsed: FieldType = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(parsed, FieldType::Email);

        // Unknown types are rejected outright
        assert!(serde_json::from_str::<FieldType>("\"date\"").is_err());
    }

    #[test]
    fn test_field_deserializes_with_defaults() {
        let field: Field =
            serde_json::from_str(r#"{"name": "age", "type": "number"}"#).unwrap();

        assert_eq!(field.name, "age");
        assert_eq!(field.field_type, FieldType::Number);
        assert!(field.label.is_none());
        assert!(!field.required);
        assert!(field.validation.is_none());
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        let mut field: Field =
            serde_json::from_str(r#"{"name": "email", "type": "email"}"#).unwrap();
        assert_eq!(field.display_label(), "email");

        field.label = Some("Adresse email".to_string());
        assert_eq!(field.display_label(), "Adresse email");
    }

    #[test]
    fn test_answer_value_is_untagged() {
        let answers: HashMap<String, AnswerValue> = serde_json::from_str(
            r#"{"name": "x", "age": 25, "agree": true}"#,
        )
        .unwrap();

        assert_eq!(answers["name"], AnswerValue::Text("x".to_string()));
        assert_eq!(answers["age"], AnswerValue::Number(25.0));
        assert_eq!(answers["agree"], AnswerValue::Bool(true));
    }
}
