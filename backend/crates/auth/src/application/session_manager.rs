//! Session Manager
//!
//! 登録・ログイン・トークン更新・ログアウトの入口をひとつにまとめたもの。
//! HTTP 層と他クレートはこの型だけを通して認証ライフサイクルを操作する。

use std::sync::Arc;

use crate::application::login::{LoginInput, LoginOutput, LoginUseCase};
use crate::application::logout::{LogoutInput, LogoutUseCase};
use crate::application::refresh::{RefreshInput, RefreshUseCase};
use crate::application::register::{RegisterInput, RegisterUseCase, RegisteredUser};
use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::domain::service::{IdentityClaims, PasswordHasher, TokenService};
use crate::error::AuthResult;

/// Entry point for the session lifecycle
///
/// `R` serves as both credential store and session ledger, the way a single
/// database-backed repository does.
pub struct SessionManager<R, T, H>
where
    R: CredentialStore + SessionLedger,
    T: TokenService,
    H: PasswordHasher,
{
    repo: Arc<R>,
    tokens: Arc<T>,
    hasher: Arc<H>,
}

// Manual impl: derive would require `R: Clone` etc.
impl<R, T, H> Clone for SessionManager<R, T, H>
where
    R: CredentialStore + SessionLedger,
    T: TokenService,
    H: PasswordHasher,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<R, T, H> SessionManager<R, T, H>
where
    R: CredentialStore + SessionLedger,
    T: TokenService,
    H: PasswordHasher,
{
    pub fn new(repo: Arc<R>, tokens: Arc<T>, hasher: Arc<H>) -> Self {
        Self {
            repo,
            tokens,
            hasher,
        }
    }

    pub async fn register(&self, input: RegisterInput) -> AuthResult<RegisteredUser> {
        RegisterUseCase::new(self.repo.clone(), self.hasher.clone())
            .execute(input)
            .await
    }

    pub async fn login(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        LoginUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.tokens.clone(),
            self.hasher.clone(),
        )
        .execute(input)
        .await
    }

    pub async fn refresh(&self, input: RefreshInput) -> AuthResult<String> {
        RefreshUseCase::new(self.repo.clone(), self.tokens.clone())
            .execute(input)
            .await
    }

    pub async fn logout(&self, input: LogoutInput) -> AuthResult<()> {
        LogoutUseCase::new(self.repo.clone()).execute(input).await
    }

    /// Resolve the identity behind an access token
    pub fn authenticate(&self, access_token: &str) -> AuthResult<IdentityClaims> {
        self.tokens.verify_access_token(access_token)
    }
}
