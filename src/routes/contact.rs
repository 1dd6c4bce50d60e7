use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::routes::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/contact
///
/// The body is taken raw so that decoding failures are reported by the relay
/// like any other failure, after the API key check.
pub async fn action(State(app_state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match app_state.relay.relay(&body).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ContactResponse {
                ok: true,
                error: None,
            }),
        ),
        Err(err) => {
            let status = if err.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };

            (
                status,
                Json(ContactResponse {
                    ok: false,
                    error: Some(err.public_message()),
                }),
            )
        }
    }
}
