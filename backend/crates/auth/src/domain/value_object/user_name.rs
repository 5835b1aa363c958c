//! User Name Value Object
//!
//! ユーザー名はログインとスレッド表示に使われる**公開ハンドル**。
//! 大文字小文字はそのまま保持し、完全一致で一意性を判定する。
//!
//! ## 不変条件
//! - 空文字は不可
//! - 長さ: 最大50文字
//! - 使用可能文字: `A-Z a-z 0-9 _` のみ（空白・記号は不可）

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is missing or empty
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains a character outside `[A-Za-z0-9_]`
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username is required"),
            Self::TooLong { length, max } => {
                write!(f, "username is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "username contains '{char}' at position {position}. Only A-Z, a-z, 0-9 and _ are allowed"
                )
            }
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate raw input and wrap it
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let input = input.into();
        Self::validate(&input)?;
        Ok(Self(input))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(input: &str) -> Result<(), UserNameError> {
        if input.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = input.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        for (position, ch) in input.chars().enumerate() {
            if !Self::is_valid_char(ch) {
                return Err(UserNameError::InvalidCharacter { char: ch, position });
            }
        }

        Ok(())
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================
