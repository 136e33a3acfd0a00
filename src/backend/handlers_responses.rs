//! Gestion des routes de soumission et de consultation des réponses.
//! Chaque soumission est validée contre les champs déclarés du formulaire
//! visé avant d'être enregistrée.

use axum::extract::{Json, Path};
use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::database::{form, response};
use crate::models::FormResponse;
use crate::utils::error_messages::{FORM_NOT_FOUND, INVALID_SUBMISSION, STORAGE_ERROR};
use crate::utils::validation::validate_submission;

/// Soumet un ensemble de réponses à un formulaire
pub async fn submit_response(
    Path(id): Path<Uuid>,
    Json(payload): Json<serde_json::Value>,
) -> axum::response::Result<(StatusCode, Json<FormResponse>)> {
    let form = form::get(&id)
        .ok_or((StatusCode::NOT_FOUND, Json(json!({ "error": FORM_NOT_FOUND }))))?;

    // The submission body must be a JSON object keyed by field name
    let raw_answers = payload
        .as_object()
        .ok_or((StatusCode::BAD_REQUEST, Json(json!({ "error": INVALID_SUBMISSION }))))?;

    // Build the form's validator and apply it to this submission; the
    // error message identifies the offending field or key
    let answers = validate_submission(&form.fields, raw_answers)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?;

    let saved = response::add(form.id, answers)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": STORAGE_ERROR }))))?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Liste les réponses enregistrées pour un formulaire
pub async fn list_responses(
    Path(id): Path<Uuid>,
) -> axum::response::Result<Json<Vec<FormResponse>>> {
    if form::get(&id).is_none() {
        return Err((StatusCode::NOT_FOUND, Json(json!({ "error": FORM_NOT_FOUND }))).into());
    }

    Ok(Json(response::get_for_form(&id)))
}
