//! Full Name Value Object

use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Display name given at registration. Free text, required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(input: impl Into<String>) -> AuthResult<Self> {
        let input = input.into();
        if input.is_empty() {
            return Err(AuthError::Validation("fullname is required".into()));
        }
        Ok(Self(input))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(
            FullName::new("Dicoding Indonesia").unwrap().as_str(),
            "Dicoding Indonesia"
        );
        assert!(matches!(FullName::new(""), Err(AuthError::Validation(_))));
    }
}
