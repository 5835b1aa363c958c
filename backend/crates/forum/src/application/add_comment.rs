//! Add Comment Use Case
//!
//! Anyone authenticated may comment on an existing thread.

use std::sync::Arc;

use kernel::id::{CommentId, ThreadId, UserId};

use crate::application::ownership::OwnershipGuard;
use crate::domain::entity::comment::Comment;
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;

pub struct AddCommentInput {
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct AddedComment {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
}

pub struct AddCommentUseCase<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
    guard: OwnershipGuard<R>,
}

impl<R> AddCommentUseCase<R>
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
        input: AddCommentInput,
    ) -> ForumResult<AddedComment> {
        let comment = Comment::new(*thread_id, input.content, *actor)?;

        self.guard.ensure_thread_exists(thread_id).await?;

        self.repo.add_comment(&comment).await?;

        tracing::info!(
            thread_id = %thread_id,
            comment_id = %comment.comment_id,
            owner = %comment.owner,
            "Comment added"
        );

        Ok(AddedComment {
            id: comment.comment_id,
            content: comment.content,
            owner: comment.owner,
        })
    }
}
