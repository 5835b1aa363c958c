//! Forum Error Types
//!
//! Forum-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Forum-specific result type alias
pub type ForumResult<T> = Result<T, ForumError>;

#[derive(Debug, Error)]
pub enum ForumError {
    /// Payload field missing or empty
    #[error("{0}")]
    Validation(String),

    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Reply not found")]
    ReplyNotFound,

    /// Actor does not own the comment or reply it tries to mutate
    #[error("You are not the owner of this resource")]
    NotOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ForumError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForumError::Validation(_) => ErrorKind::BadRequest,
            ForumError::ThreadNotFound | ForumError::CommentNotFound | ForumError::ReplyNotFound => {
                ErrorKind::NotFound
            }
            ForumError::NotOwner => ErrorKind::Forbidden,
            ForumError::Database(e) => classify_sqlx_error(e).0,
            ForumError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ForumError::Database(e) => {
                let (kind, message) = classify_sqlx_error(e);
                AppError::new(kind, message)
            }
            ForumError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ForumError::Database(e) => {
                tracing::error!(error = %e, "Forum database error");
            }
            ForumError::Internal(msg) => {
                tracing::error!(message = %msg, "Forum internal error");
            }
            ForumError::NotOwner => {
                tracing::warn!("Rejected mutation by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Forum error");
            }
        }
    }
}

impl IntoResponse for ForumError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<ForumError> for AppError {
    fn from(err: ForumError) -> Self {
        err.to_app_error()
    }
}

impl From<JsonRejection> for ForumError {
    fn from(rejection: JsonRejection) -> Self {
        ForumError::Validation(rejection.body_text())
    }
}
