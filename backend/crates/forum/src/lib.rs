//! Forum Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, read models, repository traits
//! - `application/` - Use cases, ownership guard, thread detail aggregation
//! - `infra/` - PostgreSQL / in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Threads, comments on threads, replies on comments
//! - Soft deletion of comments and replies by their owner
//! - Thread detail with nested comments and replies, deleted content masked
//!
//! ## Write Preconditions
//! Existence checks run from thread to reply before the ownership check, so
//! a reference to a missing entity is always reported as not found.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ForumConfig;
pub use error::{ForumError, ForumResult};
pub use infra::{InMemoryForumRepository, PgForumRepository};
pub use presentation::{ForumAppState, forum_router};
