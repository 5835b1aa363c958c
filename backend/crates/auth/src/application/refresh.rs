//! Refresh Use Case
//!
//! Mints a new access token from a ledger-backed refresh token. The refresh
//! token itself is never rotated.

use std::sync::Arc;

use crate::domain::repository::SessionLedger;
use crate::domain::service::TokenService;
use crate::error::{AuthError, AuthResult};

pub struct RefreshInput {
    pub refresh_token: String,
}

/// Refresh use case
pub struct RefreshUseCase<L, T>
where
    L: SessionLedger,
    T: TokenService,
{
    ledger: Arc<L>,
    tokens: Arc<T>,
}

impl<L, T> RefreshUseCase<L, T>
where
    L: SessionLedger,
    T: TokenService,
{
    pub fn new(ledger: Arc<L>, tokens: Arc<T>) -> Self {
        Self { ledger, tokens }
    }

    pub async fn execute(&self, input: RefreshInput) -> AuthResult<String> {
        if input.refresh_token.is_empty() {
            return Err(AuthError::Validation("refreshToken is required".into()));
        }

        self.tokens.verify_refresh_token(&input.refresh_token)?;

        // 署名が正しくてもログアウト済みなら拒否
        if !self.ledger.token_exists(&input.refresh_token).await? {
            return Err(AuthError::RefreshTokenNotFound);
        }

        let claims = self.tokens.decode_claims(&input.refresh_token)?;
        let access_token = self.tokens.create_access_token(&claims)?;

        tracing::debug!(user_id = %claims.user_id, "Access token refreshed");

        Ok(access_token)
    }
}
