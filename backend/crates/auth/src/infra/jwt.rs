//! JWT Token Service
//!
//! HS256 tokens carrying `{ username, id, jti, iat, exp }`. Access and refresh
//! tokens are signed with different keys so one can never pass as the other.
//! `jti` makes every issued token unique, even two logins in the same second.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::service::{IdentityClaims, TokenService};
use crate::error::{AuthError, AuthResult};

/// Wire format of the token payload
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    username: String,
    id: String,
    jti: String,
    iat: i64,
    exp: i64,
}

impl Claims {
    fn issue(identity: &IdentityClaims, ttl: Duration) -> AuthResult<Self> {
        let iat = Utc::now().timestamp();
        let exp = i64::try_from(ttl.as_secs())
            .ok()
            .and_then(|secs| iat.checked_add(secs))
            .ok_or_else(|| AuthError::Internal("token lifetime out of range".into()))?;

        Ok(Self {
            username: identity.user_name.clone(),
            id: identity.user_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat,
            exp,
        })
    }

    fn into_identity(self) -> AuthResult<IdentityClaims> {
        let user_id = UserId::parse_str(&self.id).ok_or(AuthError::InvalidToken)?;
        Ok(IdentityClaims::new(user_id, self.username))
    }
}

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl KeyPair {
    fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    fn sign(&self, identity: &IdentityClaims) -> AuthResult<String> {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &Claims::issue(identity, self.ttl)?,
            &self.encoding,
        )
        .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))
    }

    fn verify(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                AuthError::InvalidToken
            })
    }
}

/// `TokenService` backed by `jsonwebtoken`
pub struct JwtTokenService {
    access: KeyPair,
    refresh: KeyPair,
}

impl JwtTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access: KeyPair::new(&config.access_token_secret, config.access_token_ttl),
            refresh: KeyPair::new(&config.refresh_token_secret, config.refresh_token_ttl),
        }
    }
}

impl TokenService for JwtTokenService {
    fn create_access_token(&self, claims: &IdentityClaims) -> AuthResult<String> {
        self.access.sign(claims)
    }

    fn create_refresh_token(&self, claims: &IdentityClaims) -> AuthResult<String> {
        self.refresh.sign(claims)
    }

    fn verify_access_token(&self, token: &str) -> AuthResult<IdentityClaims> {
        self.access.verify(token)?.into_identity()
    }

    fn verify_refresh_token(&self, token: &str) -> AuthResult<()> {
        self.refresh.verify(token).map(|_| ())
    }

    fn decode_claims(&self, token: &str) -> AuthResult<IdentityClaims> {
        jsonwebtoken::dangerous::insecure_decode::<Claims>(token)
            .map_err(|_| AuthError::InvalidToken)?
            .claims
            .into_identity()
    }
}
