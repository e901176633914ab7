//! Readiness gate: rejects every request while the database is not ready

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, services::DbReadiness};

pub async fn require_database(
    State(readiness): State<DbReadiness>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !readiness.is_ready() {
        tracing::debug!(
            "Rejecting {} {}: database is {:?}",
            request.method(),
            request.uri().path(),
            readiness.status()
        );
        return Err(AppError::ServiceUnavailable);
    }
    Ok(next.run(request).await)
}
