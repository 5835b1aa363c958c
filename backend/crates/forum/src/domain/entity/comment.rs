//! Comment Entity
//!
//! Lifecycle: `active -> deleted`. Deletion is soft and one-way.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, ThreadId, UserId};

use crate::domain::{self, required};
use crate::error::ForumResult;

#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub thread_id: ThreadId,
    pub content: String,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Comment {
    pub fn new(thread_id: ThreadId, content: String, owner: UserId) -> ForumResult<Self> {
        Ok(Self {
            comment_id: CommentId::new(),
            thread_id,
            content: required("content", content)?,
            owner,
            created_at: domain::now(),
            is_deleted: false,
        })
    }
}
