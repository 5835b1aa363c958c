//! User Entity
//!
//! Registered account. Created once at registration and never modified.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{full_name::FullName, user_name::UserName};

/// User entity
///
/// The password hash is not part of the entity; it travels separately to the
/// credential store so that a `User` can be logged and returned freely.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login handle
    pub user_name: UserName,
    pub full_name: FullName,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(user_name: UserName, full_name: FullName) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            full_name,
            created_at: Utc::now(),
        }
    }
}
