//! Gestion des routes de création et de consultation des formulaires.
//! Un formulaire soumis par un client est validé champ par champ avant
//! d'être enregistré.

use axum::{
    extract::{Json, Path},
    http::StatusCode,
};
use anyhow::{bail, Result};
use serde_json::json;
use uuid::Uuid;

use crate::backend::models::FormPayload;
use crate::database::form;
use crate::models::{Field, Form};
use crate::utils::error_messages::{FORM_NOT_FOUND, STORAGE_ERROR};
use crate::utils::validation::{FieldName, TextInput};

/// Liste tous les formulaires
pub async fn list_forms() -> axum::response::Result<Json<Vec<Form>>> {
    let forms = form::get_all()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": STORAGE_ERROR }))))?;

    Ok(Json(forms))
}

/// Renvoie un formulaire par son identifiant
pub async fn get_form(Path(id): Path<Uuid>) -> axum::response::Result<Json<Form>> {
    let form = form::get(&id)
        .ok_or((StatusCode::NOT_FOUND, Json(json!({ "error": FORM_NOT_FOUND }))))?;

    Ok(Json(form))
}

/// Crée un nouveau formulaire avec un identifiant généré par le serveur
pub async fn create_form(
    Json(payload): Json<FormPayload>,
) -> axum::response::Result<(StatusCode, Json<Form>)> {
    // Validate the authored form before it is stored
    let form = build_form(Uuid::new_v4(), payload)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?;

    let created = form::create(form)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": STORAGE_ERROR }))))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Remplace un formulaire existant
pub async fn update_form(
    Path(id): Path<Uuid>,
    Json(payload): Json<FormPayload>,
) -> axum::response::Result<Json<Form>> {
    // The replacement goes through the same validation as a creation
    let form = build_form(id, payload)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?;

    let updated = form::update(&id, form)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": STORAGE_ERROR }))))?
        .ok_or((StatusCode::NOT_FOUND, Json(json!({ "error": FORM_NOT_FOUND }))))?;

    Ok(Json(updated))
}

/// Supprime un formulaire et ses réponses
pub async fn delete_form(
    Path(id): Path<Uuid>,
) -> axum::response::Result<Json<serde_json::Value>> {
    let deleted = form::delete(&id)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": STORAGE_ERROR }))))?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, Json(json!({ "error": FORM_NOT_FOUND }))).into());
    }

    Ok(Json(json!({ "success": true })))
}

/// Valide un payload de formulaire et construit le modèle à enregistrer.
///
/// Le titre, la description et les libellés passent par les types validés;
/// chaque nom de champ doit être un identifiant bien formé, unique au sein
/// du formulaire.
fn build_form(id: Uuid, payload: FormPayload) -> Result<Form> {
    let title = TextInput::title(&payload.title)?;

    let description = match payload.description.as_deref() {
        Some(raw) => Some(TextInput::description(raw)?),
        None => None,
    };

    let mut fields: Vec<Field> = Vec::with_capacity(payload.fields.len());
    for raw_field in payload.fields {
        let name = FieldName::new(&raw_field.name)?;

        if fields.iter().any(|f| f.name == name.as_str()) {
            bail!("Duplicate field name: {}", name);
        }

        let label = match raw_field.label.as_deref() {
            Some(raw) => Some(TextInput::label(raw)?),
            None => None,
        };

        fields.push(Field {
            name: name.to_string(),
            field_type: raw_field.field_type,
            label: label.map(|l| l.to_string()),
            required: raw_field.required,
            validation: raw_field.validation,
        });
    }

    Ok(Form {
        id,
        title: title.to_string(),
        description: description.map(|d| d.to_string()),
        fields,
    })
}
