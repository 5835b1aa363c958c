//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Secure random bytes and base64 secret decoding
//! - Password hashing (Argon2id) with zeroized clear text

pub mod crypto;
pub mod password;
