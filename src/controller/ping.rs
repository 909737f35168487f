use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::shared::structs::AppState;

/// Liveness probe. Echoes the configured application id so a deployment
/// can be matched to its Discord application at a glance.
pub async fn greet(State(app_state): State<AppState>) -> Response {
    format!("👋 {}", app_state.config.application_id).into_response()
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
