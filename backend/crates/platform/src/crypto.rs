//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Minimum accepted length for an HMAC signing secret (256 bits)
pub const MIN_SECRET_LEN: usize = 32;

/// Errors raised while decoding a configured secret
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("secret is not valid base64")]
    InvalidEncoding,

    #[error("secret must be at least {min} bytes (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Decode a base64 signing secret from configuration and enforce its length
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, SecretError> {
    let bytes = from_base64(encoded.trim()).map_err(|_| SecretError::InvalidEncoding)?;
    if bytes.len() < MIN_SECRET_LEN {
        return Err(SecretError::TooShort {
            min: MIN_SECRET_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        let encoded = to_base64(data);
        let decoded = from_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_decode_secret() {
        let secret = random_bytes(48);
        assert_eq!(decode_secret(&to_base64(&secret)).unwrap(), secret);

        let short = to_base64(&[7u8; 16]);
        assert_eq!(
            decode_secret(&short),
            Err(SecretError::TooShort { min: 32, actual: 16 })
        );

        assert_eq!(decode_secret("%%%"), Err(SecretError::InvalidEncoding));
    }
}
