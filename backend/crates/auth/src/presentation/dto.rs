//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field reaches the use case
//! as an empty string and is reported with a field-specific message. A field
//! of the wrong JSON type is rejected by the extractor.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// POST /users request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub fullname: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddedUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub added_user: AddedUser,
}

// ============================================================================
// Login
// ============================================================================

/// POST /authentications request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// Refresh / Logout
// ============================================================================

/// PUT and DELETE /authentications request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}
