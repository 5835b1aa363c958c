//! Delete Reply Use Case

use std::sync::Arc;

use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

use crate::application::ownership::OwnershipGuard;
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;

pub struct DeleteReplyUseCase<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
    guard: OwnershipGuard<R>,
}

impl<R> DeleteReplyUseCase<R>
where
    R: ForumRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            guard: OwnershipGuard::new(repo.clone()),
            repo,
        }
    }

    pub async fn execute(
        &self,
        actor: &UserId,
        thread_id: &ThreadId,
        comment_id: &CommentId,
        reply_id: &ReplyId,
    ) -> ForumResult<()> {
        self.guard.ensure_thread_exists(thread_id).await?;
        self.guard.ensure_comment_exists(comment_id).await?;
        self.guard.ensure_reply_exists(reply_id).await?;
        self.guard.ensure_reply_owner(reply_id, actor).await?;

        self.repo.soft_delete_reply(reply_id).await?;

        tracing::info!(
            thread_id = %thread_id,
            comment_id = %comment_id,
            reply_id = %reply_id,
            "Reply deleted"
        );

        Ok(())
    }
}
