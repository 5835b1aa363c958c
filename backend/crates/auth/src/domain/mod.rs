//! Domain Layer
//!
//! Contains entities, value objects, repository traits and service traits.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::{refresh_session::RefreshSession, user::User};
pub use repository::{CredentialStore, SessionLedger};
pub use service::{IdentityClaims, PasswordHasher, TokenService};
