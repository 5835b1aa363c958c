//! Ownership Guard
//!
//! 書き込み系ユースケースの前提条件チェック。
//! 呼び出し側は「存在確認（スレッド → コメント → リプライの順）→ 所有者確認」
//! の順で呼ぶこと。存在しない対象には必ず NotFound を返し、Forbidden より優先する。
//!
//! The check and the mutation that follows are separate storage calls; two
//! concurrent deletes of the same entity can both pass the check.

use std::sync::Arc;

use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

use crate::domain::repository::ForumRepository;
use crate::error::{ForumError, ForumResult};

pub struct OwnershipGuard<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
}

impl<R> OwnershipGuard<R>
where
    R: ForumRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn ensure_thread_exists(&self, thread_id: &ThreadId) -> ForumResult<()> {
        if !self.repo.thread_exists(thread_id).await? {
            return Err(ForumError::ThreadNotFound);
        }
        Ok(())
    }

    /// Soft-deleted comments count as missing
    pub async fn ensure_comment_exists(&self, comment_id: &CommentId) -> ForumResult<()> {
        if !self.repo.comment_exists(comment_id).await? {
            return Err(ForumError::CommentNotFound);
        }
        Ok(())
    }

    /// Soft-deleted replies count as missing
    pub async fn ensure_reply_exists(&self, reply_id: &ReplyId) -> ForumResult<()> {
        if !self.repo.reply_exists(reply_id).await? {
            return Err(ForumError::ReplyNotFound);
        }
        Ok(())
    }

    pub async fn ensure_comment_owner(
        &self,
        comment_id: &CommentId,
        actor: &UserId,
    ) -> ForumResult<()> {
        let owner = self
            .repo
            .find_comment_owner(comment_id)
            .await?
            .ok_or(ForumError::CommentNotFound)?;
        ensure_same(&owner, actor)
    }

    pub async fn ensure_reply_owner(&self, reply_id: &ReplyId, actor: &UserId) -> ForumResult<()> {
        let owner = self
            .repo
            .find_reply_owner(reply_id)
            .await?
            .ok_or(ForumError::ReplyNotFound)?;
        ensure_same(&owner, actor)
    }
}

fn ensure_same(owner: &UserId, actor: &UserId) -> ForumResult<()> {
    if owner != actor {
        return Err(ForumError::NotOwner);
    }
    Ok(())
}
