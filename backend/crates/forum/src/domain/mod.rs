//! Domain Layer
//!
//! Contains entities, read models, and repository traits.

pub mod entity;
pub mod repository;
pub mod view;

// Re-exports
pub use entity::{comment::Comment, reply::Reply, thread::Thread};
pub use repository::{CommentRepository, ForumRepository, ReplyRepository, ThreadRepository};
pub use view::{CommentView, ReplyView, ThreadView};

use chrono::{DateTime, SubsecRound, Utc};

use crate::error::{ForumError, ForumResult};

/// Current time at PostgreSQL `timestamptz` precision (microseconds)
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Reject a missing (empty) payload field
pub(crate) fn required(field: &str, value: String) -> ForumResult<String> {
    if value.is_empty() {
        return Err(ForumError::Validation(format!("{field} is required")));
    }
    Ok(value)
}
