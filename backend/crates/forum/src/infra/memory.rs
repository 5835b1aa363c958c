//! In-Memory Repository
//!
//! Process-local thread/comment/reply storage with the same semantics as the
//! PostgreSQL adapter, for tests. Author names are resolved at read time from
//! a user directory filled through [`InMemoryForumRepository::register_user`];
//! an author missing from it is an internal error.
//!
//! Rows are kept in insertion order; list operations sort stably by
//! `created_at`, so equal timestamps keep insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{CommentId, ReplyId, ThreadId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{comment::Comment, reply::Reply, thread::Thread};
use crate::domain::repository::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::domain::view::{CommentRecord, ReplyRecord, ThreadRecord};
use crate::error::{ForumError, ForumResult};

#[derive(Default)]
struct State {
    /// user id -> user name
    users: HashMap<UserId, String>,
    threads: Vec<Thread>,
    comments: Vec<Comment>,
    replies: Vec<Reply>,
}

impl State {
    fn username(&self, user_id: &UserId) -> ForumResult<String> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| ForumError::Internal(format!("no user record for {user_id}")))
    }

    fn comment_mut(&mut self, comment_id: &CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.comment_id == *comment_id)
    }

    fn reply_mut(&mut self, reply_id: &ReplyId) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.reply_id == *reply_id)
    }
}

/// In-memory forum repository (cheap to clone, clones share state)
#[derive(Clone, Default)]
pub struct InMemoryForumRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryForumRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a user's name available to read models
    pub async fn register_user(&self, user_id: UserId, username: impl Into<String>) {
        self.state
            .write()
            .await
            .users
            .insert(user_id, username.into());
    }

    /// Stored deletion flag of a comment, deleted or not
    pub async fn comment_is_deleted(&self, comment_id: &CommentId) -> Option<bool> {
        self.state
            .read()
            .await
            .comments
            .iter()
            .find(|c| c.comment_id == *comment_id)
            .map(|c| c.is_deleted)
    }

    /// Stored deletion flag of a reply, deleted or not
    pub async fn reply_is_deleted(&self, reply_id: &ReplyId) -> Option<bool> {
        self.state
            .read()
            .await
            .replies
            .iter()
            .find(|r| r.reply_id == *reply_id)
            .map(|r| r.is_deleted)
    }
}

impl ThreadRepository for InMemoryForumRepository {
    async fn add_thread(&self, thread: &Thread) -> ForumResult<()> {
        self.state.write().await.threads.push(thread.clone());
        Ok(())
    }

    async fn thread_exists(&self, thread_id: &ThreadId) -> ForumResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .threads
            .iter()
            .any(|t| t.thread_id == *thread_id))
    }

    async fn find_thread(&self, thread_id: &ThreadId) -> ForumResult<Option<ThreadRecord>> {
        let state = self.state.read().await;
        let Some(thread) = state.threads.iter().find(|t| t.thread_id == *thread_id) else {
            return Ok(None);
        };

        Ok(Some(ThreadRecord {
            thread_id: thread.thread_id,
            title: thread.title.clone(),
            body: thread.body.clone(),
            username: state.username(&thread.owner)?,
            created_at: thread.created_at,
        }))
    }
}

impl CommentRepository for InMemoryForumRepository {
    async fn add_comment(&self, comment: &Comment) -> ForumResult<()> {
        self.state.write().await.comments.push(comment.clone());
        Ok(())
    }

    async fn comment_exists(&self, comment_id: &CommentId) -> ForumResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .comments
            .iter()
            .any(|c| c.comment_id == *comment_id && !c.is_deleted))
    }

    async fn find_comment_owner(&self, comment_id: &CommentId) -> ForumResult<Option<UserId>> {
        Ok(self
            .state
            .read()
            .await
            .comments
            .iter()
            .find(|c| c.comment_id == *comment_id && !c.is_deleted)
            .map(|c| c.owner))
    }

    async fn soft_delete_comment(&self, comment_id: &CommentId) -> ForumResult<()> {
        let mut state = self.state.write().await;
        let comment = state
            .comment_mut(comment_id)
            .ok_or(ForumError::CommentNotFound)?;
        comment.is_deleted = true;
        Ok(())
    }

    async fn list_comments_by_thread(
        &self,
        thread_id: &ThreadId,
    ) -> ForumResult<Vec<CommentRecord>> {
        let state = self.state.read().await;
        let mut comments: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|c| c.thread_id == *thread_id)
            .collect();
        comments.sort_by_key(|c| c.created_at);

        comments
            .into_iter()
            .map(|c| -> ForumResult<CommentRecord> {
                Ok(CommentRecord {
                    comment_id: c.comment_id,
                    username: state.username(&c.owner)?,
                    content: c.content.clone(),
                    created_at: c.created_at,
                    is_deleted: c.is_deleted,
                })
            })
            .collect()
    }
}

impl ReplyRepository for InMemoryForumRepository {
    async fn add_reply(&self, reply: &Reply) -> ForumResult<()> {
        self.state.write().await.replies.push(reply.clone());
        Ok(())
    }

    async fn reply_exists(&self, reply_id: &ReplyId) -> ForumResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .replies
            .iter()
            .any(|r| r.reply_id == *reply_id && !r.is_deleted))
    }

    async fn find_reply_owner(&self, reply_id: &ReplyId) -> ForumResult<Option<UserId>> {
        Ok(self
            .state
            .read()
            .await
            .replies
            .iter()
            .find(|r| r.reply_id == *reply_id && !r.is_deleted)
            .map(|r| r.owner))
    }

    async fn soft_delete_reply(&self, reply_id: &ReplyId) -> ForumResult<()> {
        let mut state = self.state.write().await;
        let reply = state.reply_mut(reply_id).ok_or(ForumError::ReplyNotFound)?;
        reply.is_deleted = true;
        Ok(())
    }

    async fn list_replies_by_comment(
        &self,
        comment_id: &CommentId,
    ) -> ForumResult<Vec<ReplyRecord>> {
        let state = self.state.read().await;
        let mut replies: Vec<&Reply> = state
            .replies
            .iter()
            .filter(|r| r.comment_id == *comment_id)
            .collect();
        replies.sort_by_key(|r| r.created_at);

        replies
            .into_iter()
            .map(|r| -> ForumResult<ReplyRecord> {
                Ok(ReplyRecord {
                    reply_id: r.reply_id,
                    username: state.username(&r.owner)?,
                    content: r.content.clone(),
                    created_at: r.created_at,
                    is_deleted: r.is_deleted,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (InMemoryForumRepository, UserId, Thread) {
        let repo = InMemoryForumRepository::new();
        let owner = UserId::new();
        repo.register_user(owner, "dicoding").await;
        let thread = Thread::new("T".into(), "B".into(), owner).unwrap();
        repo.add_thread(&thread).await.unwrap();
        (repo, owner, thread)
    }

    #[tokio::test]
    async fn test_thread_lookup() {
        let (repo, _, thread) = seeded().await;

        assert!(repo.thread_exists(&thread.thread_id).await.unwrap());
        assert!(!repo.thread_exists(&ThreadId::new()).await.unwrap());

        let record = repo.find_thread(&thread.thread_id).await.unwrap().unwrap();
        assert_eq!(record.username, "dicoding");
        assert_eq!(record.title, "T");
        assert!(repo.find_thread(&ThreadId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_soft_deleted_comment_is_hidden_from_writes_but_listed() {
        let (repo, owner, thread) = seeded().await;
        let comment = Comment::new(thread.thread_id, "hi".into(), owner).unwrap();
        repo.add_comment(&comment).await.unwrap();

        repo.soft_delete_comment(&comment.comment_id).await.unwrap();

        assert!(!repo.comment_exists(&comment.comment_id).await.unwrap());
        assert_eq!(repo.find_comment_owner(&comment.comment_id).await.unwrap(), None);
        assert_eq!(repo.comment_is_deleted(&comment.comment_id).await, Some(true));

        let listed = repo.list_comments_by_thread(&thread.thread_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_deleted);
        assert_eq!(listed[0].content, "hi");
    }

    #[tokio::test]
    async fn test_listing_is_scoped_and_ordered() {
        let (repo, owner, thread) = seeded().await;
        let other = Thread::new("Other".into(), "B".into(), owner).unwrap();
        repo.add_thread(&other).await.unwrap();

        let mut first = Comment::new(thread.thread_id, "first".into(), owner).unwrap();
        let mut second = Comment::new(thread.thread_id, "second".into(), owner).unwrap();
        let elsewhere = Comment::new(other.thread_id, "elsewhere".into(), owner).unwrap();
        first.created_at = chrono::Utc::now() - chrono::Duration::seconds(10);
        second.created_at = chrono::Utc::now();

        // Inserted out of chronological order
        repo.add_comment(&second).await.unwrap();
        repo.add_comment(&elsewhere).await.unwrap();
        repo.add_comment(&first).await.unwrap();

        let listed = repo.list_comments_by_thread(&thread.thread_id).await.unwrap();
        let contents: Vec<_> = listed.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[tokio::test]
    async fn test_unknown_author_is_internal_error() {
        let repo = InMemoryForumRepository::new();
        let thread = Thread::new("T".into(), "B".into(), UserId::new()).unwrap();
        repo.add_thread(&thread).await.unwrap();

        let err = repo.find_thread(&thread.thread_id).await.unwrap_err();
        assert!(matches!(err, ForumError::Internal(_)));
    }
}
