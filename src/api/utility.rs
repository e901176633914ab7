//! Utility endpoints

use axum::{extract::State, Json};
use serde_json::Value;

/// Return the configured secret key as plain text
#[utoipa::path(
    get,
    path = "/key",
    tag = "utility",
    responses(
        (status = 200, description = "Secret key", body = String, content_type = "text/plain"),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_key(State(state): State<crate::AppState>) -> String {
    state.config.secrets.key.clone()
}

/// Echo the JSON request body
#[utoipa::path(
    post,
    path = "/post",
    tag = "utility",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "The request body, unchanged", body = serde_json::Value),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}
