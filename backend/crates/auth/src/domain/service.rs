//! Domain Services
//!
//! Stateless collaborators of the session use cases: token signing and
//! password hashing. Both are pure CPU work, so the traits are synchronous.

use kernel::id::UserId;

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::AuthResult;

/// Identity carried inside access and refresh tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub user_id: UserId,
    pub user_name: String,
}

impl IdentityClaims {
    pub fn new(user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }
}

/// Issues and verifies signed tokens
pub trait TokenService: Send + Sync {
    fn create_access_token(&self, claims: &IdentityClaims) -> AuthResult<String>;

    fn create_refresh_token(&self, claims: &IdentityClaims) -> AuthResult<String>;

    /// Verify signature and expiry of an access token and return its identity
    fn verify_access_token(&self, token: &str) -> AuthResult<IdentityClaims>;

    /// Verify signature and expiry of a refresh token (`InvalidToken` on failure)
    fn verify_refresh_token(&self, token: &str) -> AuthResult<()>;

    /// Read the identity without checking the signature
    fn decode_claims(&self, token: &str) -> AuthResult<IdentityClaims>;
}

/// Hashes and compares passwords
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &RawPassword) -> AuthResult<UserPassword>;

    /// Fail with `InvalidCredentials` when the password does not match
    fn compare(&self, password: &RawPassword, hash: &UserPassword) -> AuthResult<()>;
}
