//! PostgreSQL Repository Implementations

use sqlx::PgPool;
use uuid::Uuid;

use kernel::error::conversions::is_unique_violation;
use kernel::id::UserId;

use crate::domain::entity::{refresh_session::RefreshSession, user::User};
use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Credential Store Implementation
// ============================================================================

impl CredentialStore for PgAuthRepository {
    async fn verify_username_available(&self, user_name: &UserName) -> AuthResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1)",
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        if exists {
            return Err(AuthError::UserNameTaken);
        }
        Ok(())
    }

    async fn add_user(&self, user: &User, password: &UserPassword) -> AuthResult<UserId> {
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                full_name,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.full_name.as_str())
        .bind(password.as_str())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // 存在確認と INSERT の間に同名ユーザーが作られた場合
            if is_unique_violation(&e) {
                AuthError::UserNameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(UserId::from_uuid(user_id))
    }

    async fn find_password_hash_by_username(
        &self,
        user_name: &str,
    ) -> AuthResult<Option<UserPassword>> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE user_name = $1",
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hash.map(UserPassword::from_stored))
    }

    async fn find_id_by_username(&self, user_name: &str) -> AuthResult<Option<UserId>> {
        let id = sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM users WHERE user_name = $1")
            .bind(user_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.map(UserId::from_uuid))
    }
}

// ============================================================================
// Session Ledger Implementation
// ============================================================================

impl SessionLedger for PgAuthRepository {
    async fn add_token(&self, session: &RefreshSession) -> AuthResult<()> {
        sqlx::query("INSERT INTO authentications (token, created_at) VALUES ($1, $2)")
            .bind(&session.token)
            .bind(session.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn token_exists(&self, token: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_token(&self, token: &str) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}
