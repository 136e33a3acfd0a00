//! Configuration des routes pour l'application.
//! Définit les routes des formulaires et de leurs réponses.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use crate::backend::handlers_forms::{
    create_form, delete_form, get_form, list_forms, update_form,
};
use crate::backend::handlers_responses::{list_responses, submit_response};

/// Initialisation du routeur principal
pub fn get_router() -> Router {
    // Configuration CORS pour permettre les requêtes de n'importe quelle origine (en mode debug uniquement)
    let router = if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_origin(Any);
        Router::new().layer(cors)
    } else {
        Router::new()
    };

    router.merge(form_routes()).merge(response_routes())
}

/// Routes de gestion des formulaires
fn form_routes() -> Router {
    Router::new()
        .route("/forms", get(list_forms).post(create_form)) // Liste et création
        .route(
            "/forms/:id",
            get(get_form).put(update_form).delete(delete_form), // Consultation, mise à jour, suppression
        )
}

/// Routes de gestion des réponses d'un formulaire
fn response_routes() -> Router {
    Router::new().route(
        "/forms/:id/responses",
        get(list_responses).post(submit_response), // Consultation et soumission
    )
}
