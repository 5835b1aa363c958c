//! User Password Value Objects
//!
//! - [`RawPassword`]: ユーザー入力の平文パスワード（drop時にゼロ化）
//! - [`UserPassword`]: 保存用のハッシュ文字列
//!
//! Hashing itself lives behind the `PasswordHasher` trait so the use cases
//! never touch a concrete algorithm.

use platform::password::{ClearTextPassword, PasswordPolicyError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped. Any non-empty string is accepted.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::Empty => AuthError::Validation("password is required".into()),
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Password hash as persisted by the credential store
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}
