//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and service traits
//! - `application/` - Use cases and the `SessionManager` entry point
//! - `infra/` - PostgreSQL / in-memory repositories, JWT, Argon2id
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration with username + password + fullname
//! - Login issuing an access token and a refresh token
//! - Access token renewal from a refresh token held in the session ledger
//! - Logout by removing the refresh token from the ledger
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper)
//! - HS256 tokens, separate keys for access and refresh
//! - Refresh tokens are honoured only while present in the ledger

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_manager::SessionManager;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::{AuthAppState, auth_router, authenticate};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
