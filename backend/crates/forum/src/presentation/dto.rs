//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field reaches the use case
//! as an empty string and is reported with a field-specific message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::view::{CommentView, ReplyView, ThreadView};

// ============================================================================
// Threads
// ============================================================================

/// POST /threads request
#[derive(Debug, Clone, Deserialize)]
pub struct AddThreadRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddedThreadDto {
    pub id: String,
    pub title: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddThreadResponse {
    pub added_thread: AddedThreadDto,
}

// ============================================================================
// Comments / Replies
// ============================================================================

/// POST /threads/{thread_id}/comments and .../replies request
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content: Option<String>,
}

/// Added comment or reply
#[derive(Debug, Clone, Serialize)]
pub struct AddedContentDto {
    pub id: String,
    pub content: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentResponse {
    pub added_comment: AddedContentDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyResponse {
    pub added_reply: AddedContentDto,
}

// ============================================================================
// Thread Detail
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReplyDto {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl From<ReplyView> for ReplyDto {
    fn from(view: ReplyView) -> Self {
        Self {
            id: view.id.to_string(),
            content: view.content,
            date: view.date,
            username: view.username,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyDto>,
}

impl From<CommentView> for CommentDto {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id.to_string(),
            username: view.username,
            date: view.date,
            content: view.content,
            replies: view.replies.into_iter().map(ReplyDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreadDto {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDto>,
}

impl From<ThreadView> for ThreadDto {
    fn from(view: ThreadView) -> Self {
        Self {
            id: view.id.to_string(),
            title: view.title,
            body: view.body,
            date: view.date,
            username: view.username,
            comments: view.comments.into_iter().map(CommentDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailResponse {
    pub thread: ThreadDto,
}
