//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a sqlx error into a status kind and a client-safe message.
///
/// ドメイン層のエラー型も `Database(sqlx::Error)` を持つので、同じ分類を共有する。
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::PoolClosed => (ErrorKind::ServiceUnavailable, "Database pool is closed"),
        sqlx::Error::Database(db_err) => {
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            match db_err.code().as_deref() {
                Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
                Some("23503") => (ErrorKind::NotFound, "Referenced record does not exist"),
                Some("23502") | Some("23514") => (ErrorKind::BadRequest, "Constraint violation"),
                Some("53000" | "53100" | "53200" | "53300") => (
                    ErrorKind::ServiceUnavailable,
                    "Database resource exhausted",
                ),
                Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                    (ErrorKind::ServiceUnavailable, "Database unavailable")
                }
                _ => (ErrorKind::InternalServerError, "Database error"),
            }
        }
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx_error(&err);
        AppError::new(kind, message).with_source(err)
    }
}

/// Whether a sqlx error is a PostgreSQL unique-constraint violation.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "status": if self.is_server_error() { "error" } else { "fail" },
            "title": self.kind().as_str(),
            "code": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
