//! Thread Entity
//!
//! スレッドは作成後に変更されない（編集・削除操作は持たない）。

use chrono::{DateTime, Utc};
use kernel::id::{ThreadId, UserId};

use crate::domain::{self, required};
use crate::error::ForumResult;

#[derive(Debug, Clone)]
pub struct Thread {
    pub thread_id: ThreadId,
    pub title: String,
    pub body: String,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Validate input and create a thread owned by `owner`
    pub fn new(title: String, body: String, owner: UserId) -> ForumResult<Self> {
        Ok(Self {
            thread_id: ThreadId::new(),
            title: required("title", title)?,
            body: required("body", body)?,
            owner,
            created_at: domain::now(),
        })
    }
}
