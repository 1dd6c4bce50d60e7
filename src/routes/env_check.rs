use axum::{Json, extract::State};

use crate::{config::EnvCheck, routes::AppState};

/// GET /api/env-check - reports which email secrets are set, never their values.
pub async fn report(State(app_state): State<AppState>) -> Json<EnvCheck> {
    Json(app_state.config.email.presence())
}
