//! Argon2id Password Hasher

use platform::password::{HashCost, HashedPassword};

use crate::application::config::AuthConfig;
use crate::domain::service::PasswordHasher;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// `PasswordHasher` backed by `platform::password`
pub struct Argon2PasswordHasher {
    pepper: Option<Vec<u8>>,
    cost: HashCost,
}

impl Argon2PasswordHasher {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            pepper: config.password_pepper.clone(),
            cost: config.password_hash_cost,
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &RawPassword) -> AuthResult<UserPassword> {
        let hashed = password
            .inner()
            .hash_with(self.pepper.as_deref(), &self.cost)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(UserPassword::from_stored(hashed.as_phc_string()))
    }

    fn compare(&self, password: &RawPassword, hash: &UserPassword) -> AuthResult<()> {
        let stored = HashedPassword::from_phc_string(hash.as_str())
            .map_err(|_| AuthError::Internal("Invalid password hash in database".into()))?;

        if stored.verify(password.inner(), self.pepper.as_deref()) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher(pepper: Option<&[u8]>) -> Argon2PasswordHasher {
        let config = AuthConfig::with_random_secrets()
            .with_hash_cost(HashCost::minimal())
            .with_pepper(pepper.map(<[u8]>::to_vec));
        Argon2PasswordHasher::new(&config)
    }

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_hash_then_compare() {
        let hasher = hasher(None);
        let hash = hasher.hash(&raw("secret")).unwrap();

        assert_ne!(hash.as_str(), "secret");
        assert!(hasher.compare(&raw("secret"), &hash).is_ok());
        assert!(matches!(
            hasher.compare(&raw("wrong"), &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_pepper_must_match() {
        let hash = hasher(Some(b"pepper")).hash(&raw("secret")).unwrap();
        assert!(hasher(Some(b"pepper")).compare(&raw("secret"), &hash).is_ok());
        assert!(hasher(None).compare(&raw("secret"), &hash).is_err());
    }

    #[test]
    fn test_corrupt_hash_is_internal_error() {
        let result = hasher(None).compare(&raw("secret"), &UserPassword::from_stored("plain"));
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
