use axum::{
    Router,
    handler::Handler,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use sipandslay_contact::ContactRelay;
use tower_http::services::ServeDir;

use crate::{
    assets::AssetsService,
    template::{NotFoundTemplate, Template},
};

mod contact;
mod env_check;
mod gallery;
mod health;
mod index;

pub use contact::ContactResponse;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: ContactRelay,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: &template.layout,
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    // Logo, favicon and gallery media are plain files served from the site root
    let public = ServeDir::new(&app_state.config.server.public_dir)
        .not_found_service(fallback.with_state(app_state.clone()));

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/gallery", get(gallery::page))
        .route("/api/contact", post(contact::action))
        .route("/api/env-check", get(env_check::report))
        .nest_service("/static", AssetsService::new())
        .fallback_service(public)
        .with_state(app_state)
}
