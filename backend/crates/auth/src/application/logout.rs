//! Logout Use Case
//!
//! Removes a refresh token from the session ledger.

use std::sync::Arc;

use crate::domain::repository::SessionLedger;
use crate::error::{AuthError, AuthResult};

pub struct LogoutInput {
    pub refresh_token: String,
}

/// Logout use case
pub struct LogoutUseCase<L>
where
    L: SessionLedger,
{
    ledger: Arc<L>,
}

impl<L> LogoutUseCase<L>
where
    L: SessionLedger,
{
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    pub async fn execute(&self, input: LogoutInput) -> AuthResult<()> {
        if input.refresh_token.is_empty() {
            return Err(AuthError::Validation("refreshToken is required".into()));
        }

        if !self.ledger.token_exists(&input.refresh_token).await? {
            return Err(AuthError::RefreshTokenNotFound);
        }

        // A concurrent logout may win between the check and the delete.
        if !self.ledger.delete_token(&input.refresh_token).await? {
            return Err(AuthError::RefreshTokenNotFound);
        }

        tracing::info!("Refresh token revoked");

        Ok(())
    }
}
