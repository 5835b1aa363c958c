//! Login Use Case
//!
//! Verifies credentials and issues an access/refresh token pair.

use std::sync::Arc;

use crate::domain::entity::refresh_session::RefreshSession;
use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::domain::service::{IdentityClaims, PasswordHasher, TokenService};
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Issued token pair
pub struct LoginOutput {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login use case
pub struct LoginUseCase<S, L, T, H>
where
    S: CredentialStore,
    L: SessionLedger,
    T: TokenService,
    H: PasswordHasher,
{
    store: Arc<S>,
    ledger: Arc<L>,
    tokens: Arc<T>,
    hasher: Arc<H>,
}

impl<S, L, T, H> LoginUseCase<S, L, T, H>
where
    S: CredentialStore,
    L: SessionLedger,
    T: TokenService,
    H: PasswordHasher,
{
    pub fn new(store: Arc<S>, ledger: Arc<L>, tokens: Arc<T>, hasher: Arc<H>) -> Self {
        Self {
            store,
            ledger,
            tokens,
            hasher,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.username.is_empty() {
            return Err(AuthError::Validation("username is required".into()));
        }
        let raw_password = RawPassword::new(input.password)?;

        let password_hash = self
            .store
            .find_password_hash_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.hasher.compare(&raw_password, &password_hash)?;

        let user_id = self
            .store
            .find_id_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let claims = IdentityClaims::new(user_id, input.username);
        let access_token = self.tokens.create_access_token(&claims)?;
        let refresh_token = self.tokens.create_refresh_token(&claims)?;

        self.ledger
            .add_token(&RefreshSession::new(refresh_token.clone()))
            .await?;

        tracing::info!(user_id = %claims.user_id, "User logged in");

        Ok(LoginOutput {
            access_token,
            refresh_token,
        })
    }
}
