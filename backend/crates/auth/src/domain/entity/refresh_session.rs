//! Refresh Session Entity
//!
//! ログイン時に発行したリフレッシュトークンの台帳エントリ。
//! 台帳に存在するトークンだけが更新・ログアウトに使える。

use chrono::{DateTime, Utc};
use std::fmt;

/// Ledger entry for an issued refresh token
#[derive(Clone)]
pub struct RefreshSession {
    /// Signed refresh token (primary key of the ledger)
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl RefreshSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for RefreshSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshSession")
            .field("token", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}
