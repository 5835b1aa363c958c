//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Payload field missing, empty or breaking a format rule
    #[error("{0}")]
    Validation(String),

    /// User name already exists
    #[error("User name is already taken")]
    UserNameTaken,

    /// Unknown user name or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signature, structure or expiry check failed
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Refresh token is not (or no longer) in the session ledger
    #[error("Refresh token is not recognized")]
    RefreshTokenNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::RefreshTokenNotFound => ErrorKind::NotFound,
            AuthError::Database(e) => classify_sqlx_error(e).0,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // 内部の詳細はクライアントに返さない
            AuthError::Database(e) => {
                let (kind, message) = classify_sqlx_error(e);
                AppError::new(kind, message)
            }
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::InvalidCredentials => AppError::new(self.kind(), self.to_string())
                .with_action("Check the user name and password"),
            AuthError::InvalidToken => AppError::new(self.kind(), self.to_string())
                .with_action("Log in again to obtain new tokens"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl From<UserNameError> for AuthError {
    fn from(err: UserNameError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_status_codes() {
        assert_eq!(AuthError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::UserNameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::RefreshTokenNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let app = AuthError::Internal("secret detail".into()).to_app_error();
        assert!(!app.message().contains("secret detail"));
    }

    #[test]
    fn test_unavailable_database_is_service_unavailable() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let app = err.to_app_error();
        assert_eq!(app.kind(), ErrorKind::ServiceUnavailable);
        assert!(app.is_server_error());
    }

    #[test]
    fn test_unexpected_database_error_is_internal_and_hidden() {
        let err = AuthError::Database(sqlx::Error::Protocol("relation users missing".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_app_error().message().contains("relation users"));
    }

    #[test]
    fn test_user_name_error_becomes_validation() {
        let err: AuthError = UserNameError::Empty.into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "username is required"));
    }
}
