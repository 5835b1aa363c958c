//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared behind an `Arc`.

use std::fmt;
use std::time::Duration;

pub use platform::password::HashCost;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 key for access tokens
    pub access_token_secret: Vec<u8>,
    /// HS256 key for refresh tokens (must differ from the access key)
    pub refresh_token_secret: Vec<u8>,
    /// Access token lifetime (default 3000 seconds)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (default 30 days)
    pub refresh_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost for new password hashes
    pub password_hash_cost: HashCost,
}

pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(3000);
pub const DEFAULT_REFRESH_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 3600);

impl AuthConfig {
    pub fn new(access_token_secret: Vec<u8>, refresh_token_secret: Vec<u8>) -> Self {
        Self {
            access_token_secret,
            refresh_token_secret,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
            refresh_token_ttl: DEFAULT_REFRESH_TOKEN_TTL,
            password_pepper: None,
            password_hash_cost: HashCost::default(),
        }
    }

    /// Create config with random signing secrets (for development and tests)
    pub fn with_random_secrets() -> Self {
        Self::new(
            platform::crypto::random_bytes(32),
            platform::crypto::random_bytes(32),
        )
    }

    pub fn with_ttls(mut self, access: Duration, refresh: Duration) -> Self {
        self.access_token_ttl = access;
        self.refresh_token_ttl = refresh;
        self
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    pub fn with_hash_cost(mut self, cost: HashCost) -> Self {
        self.password_hash_cost = cost;
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_secret", &"[REDACTED]")
            .field("refresh_token_secret", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("password_hash_cost", &self.password_hash_cost)
            .finish()
    }
}
