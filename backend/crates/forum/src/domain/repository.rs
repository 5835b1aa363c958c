//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! `*_exists` checks treat soft-deleted comments and replies as absent.
//! List operations return rows ordered by `created_at` ascending with the id
//! as tie-breaker.

use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

use crate::domain::entity::{comment::Comment, reply::Reply, thread::Thread};
use crate::domain::view::{CommentRecord, ReplyRecord, ThreadRecord};
use crate::error::ForumResult;

#[trait_variant::make(ThreadRepository: Send)]
pub trait LocalThreadRepository {
    async fn add_thread(&self, thread: &Thread) -> ForumResult<()>;

    async fn thread_exists(&self, thread_id: &ThreadId) -> ForumResult<bool>;

    async fn find_thread(&self, thread_id: &ThreadId) -> ForumResult<Option<ThreadRecord>>;
}

#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    async fn add_comment(&self, comment: &Comment) -> ForumResult<()>;

    async fn comment_exists(&self, comment_id: &CommentId) -> ForumResult<bool>;

    /// Owner of a non-deleted comment
    async fn find_comment_owner(&self, comment_id: &CommentId) -> ForumResult<Option<UserId>>;

    async fn soft_delete_comment(&self, comment_id: &CommentId) -> ForumResult<()>;

    async fn list_comments_by_thread(
        &self,
        thread_id: &ThreadId,
    ) -> ForumResult<Vec<CommentRecord>>;
}

#[trait_variant::make(ReplyRepository: Send)]
pub trait LocalReplyRepository {
    async fn add_reply(&self, reply: &Reply) -> ForumResult<()>;

    async fn reply_exists(&self, reply_id: &ReplyId) -> ForumResult<bool>;

    /// Owner of a non-deleted reply
    async fn find_reply_owner(&self, reply_id: &ReplyId) -> ForumResult<Option<UserId>>;

    async fn soft_delete_reply(&self, reply_id: &ReplyId) -> ForumResult<()>;

    async fn list_replies_by_comment(
        &self,
        comment_id: &CommentId,
    ) -> ForumResult<Vec<ReplyRecord>>;
}

/// Everything the forum use cases need from one storage adapter
pub trait ForumRepository:
    ThreadRepository + CommentRepository + ReplyRepository + Send + Sync + 'static
{
}

impl<T> ForumRepository for T where
    T: ThreadRepository + CommentRepository + ReplyRepository + Send + Sync + 'static
{
}
