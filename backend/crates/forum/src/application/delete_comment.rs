//! Delete Comment Use Case
//!
//! Soft delete; only the comment's owner may do it.

use std::sync::Arc;

use kernel::id::{CommentId, ThreadId, UserId};

use crate::application::ownership::OwnershipGuard;
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;

pub struct DeleteCommentUseCase<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
    guard: OwnershipGuard<R>,
}

impl<R> DeleteCommentUseCase<R>
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
    ) -> ForumResult<()> {
        self.guard.ensure_thread_exists(thread_id).await?;
        self.guard.ensure_comment_exists(comment_id).await?;
        self.guard.ensure_comment_owner(comment_id, actor).await?;

        self.repo.soft_delete_comment(comment_id).await?;

        tracing::info!(
            thread_id = %thread_id,
            comment_id = %comment_id,
            "Comment deleted"
        );

        Ok(())
    }
}
