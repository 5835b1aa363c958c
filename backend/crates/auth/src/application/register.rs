//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::service::PasswordHasher;
use crate::domain::value_object::{
    full_name::FullName, user_name::UserName, user_password::RawPassword,
};
use crate::error::AuthResult;

/// Register input
///
/// An empty string stands for a missing field.
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

/// Register output
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user_id: UserId,
    pub username: String,
    pub fullname: String,
}

/// Register use case
pub struct RegisterUseCase<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> RegisterUseCase<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisteredUser> {
        // 入力はすべてリポジトリに触れる前に検証する
        let user_name = UserName::new(input.username)?;
        let raw_password = RawPassword::new(input.password)?;
        let full_name = FullName::new(input.fullname)?;

        self.store.verify_username_available(&user_name).await?;

        let password_hash = self.hasher.hash(&raw_password)?;

        let user = User::new(user_name, full_name);
        let user_id = self.store.add_user(&user, &password_hash).await?;

        tracing::info!(
            user_id = %user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisteredUser {
            user_id,
            username: user.user_name.into_inner(),
            fullname: user.full_name.as_str().to_string(),
        })
    }
}
