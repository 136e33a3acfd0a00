//! Point d'entrée principal de l'application.
//! Initialise les bases de données et démarre le serveur web avec Axum.

mod backend;
mod consts;
mod database;
mod models;
mod utils;

use std::net::SocketAddr;
use dotenv::dotenv;
use log::info;
use crate::consts::HTTP_PORT;

#[tokio::main]
async fn main() {
    // Charger les variables d'environnement
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Charger les bases de données
    database::form::load().ok();
    database::response::load().ok();

    let app = backend::router::get_router();

    // Démarrer le serveur web
    let addr = SocketAddr::from(([0, 0, 0, 0], HTTP_PORT));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to open web server listener");

    axum::serve(listener, app)
        .await
        .expect("Failed to bind Axum to listener");
}
