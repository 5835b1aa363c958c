//! Read Models
//!
//! スレッド詳細表示用の読み取りモデル。
//! リポジトリが返す `*Record` は削除フラグ付きの生データで、
//! `*View` へ変換する時点で削除済み本文をプレースホルダーに置き換える。

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, ReplyId, ThreadId};

/// Thread row joined with its author's user name
#[derive(Debug, Clone)]
pub struct ThreadRecord {
    pub thread_id: ThreadId,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Comment row joined with its author's user name
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub comment_id: CommentId,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Reply row joined with its author's user name
#[derive(Debug, Clone)]
pub struct ReplyRecord {
    pub reply_id: ReplyId,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyView {
    pub id: ReplyId,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl ReplyView {
    pub fn from_record(record: ReplyRecord, deleted_placeholder: &str) -> Self {
        Self {
            id: record.reply_id,
            content: mask(record.content, record.is_deleted, deleted_placeholder),
            date: record.created_at,
            username: record.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: CommentId,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    /// Ascending by creation time
    pub replies: Vec<ReplyView>,
}

impl CommentView {
    pub fn from_record(
        record: CommentRecord,
        deleted_placeholder: &str,
        replies: Vec<ReplyView>,
    ) -> Self {
        Self {
            id: record.comment_id,
            username: record.username,
            date: record.created_at,
            content: mask(record.content, record.is_deleted, deleted_placeholder),
            replies,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadView {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    /// Ascending by creation time
    pub comments: Vec<CommentView>,
}

impl ThreadView {
    pub fn assemble(record: ThreadRecord, comments: Vec<CommentView>) -> Self {
        Self {
            id: record.thread_id,
            title: record.title,
            body: record.body,
            date: record.created_at,
            username: record.username,
            comments,
        }
    }
}

fn mask(content: String, is_deleted: bool, placeholder: &str) -> String {
    if is_deleted {
        placeholder.to_string()
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(is_deleted: bool) -> ReplyRecord {
        ReplyRecord {
            reply_id: ReplyId::new(),
            username: "dicoding".into(),
            content: "original".into(),
            created_at: Utc::now(),
            is_deleted,
        }
    }

    #[test]
    fn test_deleted_reply_is_masked() {
        let view = ReplyView::from_record(reply(true), "[reply deleted]");
        assert_eq!(view.content, "[reply deleted]");
        assert_eq!(view.username, "dicoding");
    }

    #[test]
    fn test_active_reply_keeps_content() {
        let view = ReplyView::from_record(reply(false), "[reply deleted]");
        assert_eq!(view.content, "original");
    }

    #[test]
    fn test_deleted_comment_is_masked_but_keeps_replies() {
        let record = CommentRecord {
            comment_id: CommentId::new(),
            username: "alice".into(),
            content: "secret".into(),
            created_at: Utc::now(),
            is_deleted: true,
        };
        let replies = vec![ReplyView::from_record(reply(false), "[reply deleted]")];
        let view = CommentView::from_record(record, "[comment deleted]", replies);

        assert_eq!(view.content, "[comment deleted]");
        assert_eq!(view.replies.len(), 1);
        assert_eq!(view.replies[0].content, "original");
    }
}
