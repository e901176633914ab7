//! Error types for the book catalog server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Invalid isbn: {0}")]
    InvalidIsbn(String),

    #[error("No data found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            error: message.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("Service unavailable"),
            )
                .into_response(),
            AppError::InvalidIsbn(reason) => {
                tracing::debug!("Rejected isbn lookup: {}", reason);
                (StatusCode::BAD_REQUEST, ErrorResponse::new("Invalid isbn")).into_response()
            }
            // Plain text, not JSON
            AppError::NotFound => (StatusCode::NOT_FOUND, "No data found").into_response(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error()
            }
            AppError::Migration(e) => {
                tracing::error!("Migration error: {:?}", e);
                internal_error()
            }
            AppError::Dataset(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("Internal server error"),
    )
        .into_response()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
