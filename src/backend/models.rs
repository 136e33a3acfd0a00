//! Définitions des structures pour les interactions avec l'API.
//! Contient les payloads de création et de mise à jour des formulaires.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::FieldType;

/// Structure pour la création ou la mise à jour d'un formulaire
#[derive(Deserialize)]
pub struct FormPayload {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldPayload>,
}

/// Un champ tel que soumis par l'auteur du formulaire, avant validation
#[derive(Deserialize)]
pub struct FieldPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub validation: Option<HashMap<String, serde_json::Value>>,
}
