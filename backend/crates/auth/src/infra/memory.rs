//! In-Memory Repository
//!
//! Process-local credential store and session ledger with the same semantics
//! as the PostgreSQL adapter. Test-only: the api binary always runs on
//! PostgreSQL.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{refresh_session::RefreshSession, user::User};
use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

#[derive(Clone)]
struct StoredUser {
    user_id: UserId,
    password: UserPassword,
}

#[derive(Default)]
struct State {
    /// user name -> credentials
    users: HashMap<String, StoredUser>,
    tokens: HashSet<String>,
}

/// In-memory auth repository (cheap to clone, clones share state)
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refresh tokens currently in the ledger
    pub async fn token_count(&self) -> usize {
        self.state.read().await.tokens.len()
    }
}

impl CredentialStore for InMemoryAuthRepository {
    async fn verify_username_available(&self, user_name: &UserName) -> AuthResult<()> {
        if self.state.read().await.users.contains_key(user_name.as_str()) {
            return Err(AuthError::UserNameTaken);
        }
        Ok(())
    }

    async fn add_user(&self, user: &User, password: &UserPassword) -> AuthResult<UserId> {
        let mut state = self.state.write().await;
        if state.users.contains_key(user.user_name.as_str()) {
            return Err(AuthError::UserNameTaken);
        }
        state.users.insert(
            user.user_name.as_str().to_string(),
            StoredUser {
                user_id: user.user_id,
                password: password.clone(),
            },
        );
        Ok(user.user_id)
    }

    async fn find_password_hash_by_username(
        &self,
        user_name: &str,
    ) -> AuthResult<Option<UserPassword>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .get(user_name)
            .map(|u| u.password.clone()))
    }

    async fn find_id_by_username(&self, user_name: &str) -> AuthResult<Option<UserId>> {
        Ok(self.state.read().await.users.get(user_name).map(|u| u.user_id))
    }
}

impl SessionLedger for InMemoryAuthRepository {
    async fn add_token(&self, session: &RefreshSession) -> AuthResult<()> {
        self.state.write().await.tokens.insert(session.token.clone());
        Ok(())
    }

    async fn token_exists(&self, token: &str) -> AuthResult<bool> {
        Ok(self.state.read().await.tokens.contains(token))
    }

    async fn delete_token(&self, token: &str) -> AuthResult<bool> {
        Ok(self.state.write().await.tokens.remove(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::full_name::FullName;

    fn user(name: &str) -> User {
        User::new(UserName::new(name).unwrap(), FullName::new("Test User").unwrap())
    }

    #[tokio::test]
    async fn test_username_uniqueness() {
        let repo = InMemoryAuthRepository::new();
        let alice = user("alice");
        let hash = UserPassword::from_stored("hash");

        assert!(repo.verify_username_available(&alice.user_name).await.is_ok());
        let id = repo.add_user(&alice, &hash).await.unwrap();
        assert_eq!(id, alice.user_id);

        assert!(matches!(
            repo.verify_username_available(&alice.user_name).await,
            Err(AuthError::UserNameTaken)
        ));
        assert!(matches!(
            repo.add_user(&user("alice"), &hash).await,
            Err(AuthError::UserNameTaken)
        ));
        // Case-sensitive
        assert!(repo.add_user(&user("Alice"), &hash).await.is_ok());
    }

    #[tokio::test]
    async fn test_lookups() {
        let repo = InMemoryAuthRepository::new();
        let bob = user("bob");
        repo.add_user(&bob, &UserPassword::from_stored("h")).await.unwrap();

        assert_eq!(
            repo.find_password_hash_by_username("bob").await.unwrap(),
            Some(UserPassword::from_stored("h"))
        );
        assert_eq!(repo.find_id_by_username("bob").await.unwrap(), Some(bob.user_id));
        assert_eq!(repo.find_id_by_username("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ledger() {
        let repo = InMemoryAuthRepository::new();
        repo.add_token(&RefreshSession::new("t1")).await.unwrap();

        assert!(repo.token_exists("t1").await.unwrap());
        assert!(repo.delete_token("t1").await.unwrap());
        assert!(!repo.token_exists("t1").await.unwrap());
        assert!(!repo.delete_token("t1").await.unwrap());
    }
}
