//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cpanel_core::error::CpanelError;
use thiserror::Error;

/// Convenience alias for handler return types.
pub type AdminResult<T> = Result<T, AdminError>;

/// Errors that escape the controller, with HTTP status mapping.
///
/// NotFound and validation failures normally never reach this layer —
/// the controller absorbs them into redirects — but the mapping exists
/// for the paths that bypass it.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database unavailable: {0}")]
    DbUnavailable(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AdminError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AdminError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AdminError::DbUnavailable(m) => {
                (StatusCode::SERVICE_UNAVAILABLE, "db_unavailable", m.as_str())
            }
            AdminError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(serde_json::json!({
            "error": error,
            "message": message,
        }));
        (status, body).into_response()
    }
}

impl From<CpanelError> for AdminError {
    fn from(e: CpanelError) -> Self {
        match e {
            CpanelError::NotFound { .. } => AdminError::NotFound(e.to_string()),
            CpanelError::AlreadyExists { .. } | CpanelError::Validation { .. } => {
                AdminError::Validation(e.to_string())
            }
            CpanelError::Database(m) => AdminError::DbUnavailable(m),
            CpanelError::Internal(m) => AdminError::Internal(m),
        }
    }
}
