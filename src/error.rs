use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Domain error taxonomy. Every variant names a condition the caller
/// has to resolve; nothing here is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or out-of-range input (non-positive price, seat ref
    /// not in the showroom's layout, bad coordinates).
    #[error("{0}")]
    Validation(String),
    /// A referenced entity id does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness violation: seat already booked, show time overlap,
    /// duplicate email.
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Database(err) => {
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
