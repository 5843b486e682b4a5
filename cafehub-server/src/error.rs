//! Unified application error type
//!
//! `AppError` maps straight onto the API's fixed error envelope,
//! `{"error": {<kind>: <message>}}`, with the matching HTTP status.
//! Database errors are logged here and never leak details to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::cafe::FieldViolations;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown cafe id (404)
    #[error("{0}")]
    NotFound(String),

    /// Unique-name collision (409)
    #[error("{0}")]
    Conflict(String),

    /// Rejected input (400)
    #[error("{0}")]
    Validation(String),

    /// Database failure (500)
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Convenience alias for handler results
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// The message the API returns for an unknown cafe id
    pub fn cafe_not_found() -> Self {
        Self::NotFound("Sorry a cafe with that id was not found in the database.".into())
    }

    /// Fold field-level violations into a single client-facing message
    pub fn from_violations(violations: FieldViolations) -> Self {
        let message = violations
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(" ");
        Self::Validation(message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AppError::Conflict("A cafe with that name is already listed.".into());
            }
        }
        AppError::Database(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Something went wrong on our side.".to_string(),
                )
            }
        };

        let mut detail = serde_json::Map::new();
        detail.insert(kind.to_string(), serde_json::Value::String(message));
        let body = serde_json::json!({ "error": detail });

        (status, Json(body)).into_response()
    }
}
