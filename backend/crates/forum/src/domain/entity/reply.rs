//! Reply Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, ReplyId, UserId};

use crate::domain::{self, required};
use crate::error::ForumResult;

#[derive(Debug, Clone)]
pub struct Reply {
    pub reply_id: ReplyId,
    pub comment_id: CommentId,
    pub content: String,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Reply {
    pub fn new(comment_id: CommentId, content: String, owner: UserId) -> ForumResult<Self> {
        Ok(Self {
            reply_id: ReplyId::new(),
            comment_id,
            content: required("content", content)?,
            owner,
            created_at: domain::now(),
            is_deleted: false,
        })
    }
}
