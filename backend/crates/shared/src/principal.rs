//! Authenticated Principal
//!
//! The identity an access token proves. The auth crate's middleware decodes
//! the bearer token and stores a [`Principal`] in the request extensions;
//! content handlers extract it to learn who is acting.

use crate::id::UserId;

/// Actor identity resolved from a verified access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
}

impl Principal {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Principal>().cloned().ok_or_else(|| {
            crate::error::app_error::AppError::unauthorized("Missing authentication")
                .with_action("Send a valid access token as a Bearer credential")
        })
    }
}
