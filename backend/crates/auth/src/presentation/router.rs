//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::{AuthConfig, SessionManager};
use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::infra::{Argon2PasswordHasher, JwtTokenService};
use crate::presentation::handlers::{self, AuthAppState};

impl<R> AuthAppState<R>
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    /// Wire the repository with the token service and hasher built from `config`
    pub fn new(repo: R, config: &AuthConfig) -> Self {
        Self {
            sessions: SessionManager::new(
                Arc::new(repo),
                Arc::new(JwtTokenService::new(config)),
                Arc::new(Argon2PasswordHasher::new(config)),
            ),
        }
    }
}

/// Create the Auth router (`/users`, `/authentications`)
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/users", post(handlers::register::<R>))
        .route(
            "/authentications",
            post(handlers::login::<R>)
                .put(handlers::refresh::<R>)
                .delete(handlers::logout::<R>),
        )
        .with_state(state)
}
