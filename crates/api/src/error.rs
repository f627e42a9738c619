use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mfapi_core::validation::FieldErrors;

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to render the shared envelope with the
/// error taxonomy: 400 for malformed input, 404 for missing records, 500
/// for infrastructure failures (the message carries the underlying cause
/// so callers can diagnose; the service never retries on its own).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required request input is missing or unusable.
    #[error("{0}")]
    BadRequest(String),

    /// Schema validation failed; per-field messages attach under `data`.
    #[error("Validation error")]
    Validation(FieldErrors),

    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Envelope payload serialization failure.
    #[error("{0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Envelope::error(msg)),

            AppError::Validation(report) => {
                tracing::warn!(fields = ?report.keys().collect::<Vec<_>>(), "Validation failed");
                let data = serde_json::to_value(&report).unwrap_or_default();
                (
                    StatusCode::BAD_REQUEST,
                    Envelope::error("Validation error").data(data),
                )
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, Envelope::error(msg)),

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Serialize(err) => {
                tracing::error!(error = %err, "Response serialization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::error(err.to_string()),
                )
            }
        };

        (status, envelope).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and envelope.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500, with the driver's description in the
///   message for diagnosis.
fn classify_sqlx_error(err: sqlx::Error) -> (StatusCode, Envelope) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            Envelope::error("Resource not found"),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::error(other.to_string()),
            )
        }
    }
}

/// True when the error is a PostgreSQL unique-constraint violation
/// (error code 23505) on the named constraint.
///
/// Write paths that pre-check for duplicates use this to absorb a lost
/// race as the same outcome the pre-check would have produced.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
