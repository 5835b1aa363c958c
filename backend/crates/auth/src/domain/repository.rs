//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{refresh_session::RefreshSession, user::User};
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::AuthResult;

/// Credential store: users and their password hashes
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Fail with `UserNameTaken` if the user name is already registered
    async fn verify_username_available(&self, user_name: &UserName) -> AuthResult<()>;

    /// Persist a user with its password hash and return the stored id.
    ///
    /// Implementations report a lost uniqueness race as `UserNameTaken`.
    async fn add_user(&self, user: &User, password: &UserPassword) -> AuthResult<UserId>;

    /// Look up the stored hash for a login attempt
    async fn find_password_hash_by_username(
        &self,
        user_name: &str,
    ) -> AuthResult<Option<UserPassword>>;

    async fn find_id_by_username(&self, user_name: &str) -> AuthResult<Option<UserId>>;
}

/// Session ledger: allowlist of issued refresh tokens
#[trait_variant::make(SessionLedger: Send)]
pub trait LocalSessionLedger {
    async fn add_token(&self, session: &RefreshSession) -> AuthResult<()>;

    async fn token_exists(&self, token: &str) -> AuthResult<bool>;

    /// Remove a token. Returns `false` when nothing was removed.
    async fn delete_token(&self, token: &str) -> AuthResult<bool>;
}
