//! Add Reply Use Case

use std::sync::Arc;

use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

use crate::application::ownership::OwnershipGuard;
use crate::domain::entity::reply::Reply;
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;

pub struct AddReplyInput {
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct AddedReply {
    pub id: ReplyId,
    pub content: String,
    pub owner: UserId,
}

pub struct AddReplyUseCase<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
    guard: OwnershipGuard<R>,
}

impl<R> AddReplyUseCase<R>
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
        input: AddReplyInput,
    ) -> ForumResult<AddedReply> {
        let reply = Reply::new(*comment_id, input.content, *actor)?;

        self.guard.ensure_thread_exists(thread_id).await?;
        self.guard.ensure_comment_exists(comment_id).await?;

        self.repo.add_reply(&reply).await?;

        tracing::info!(
            thread_id = %thread_id,
            comment_id = %comment_id,
            reply_id = %reply.reply_id,
            "Reply added"
        );

        Ok(AddedReply {
            id: reply.reply_id,
            content: reply.content,
            owner: reply.owner,
        })
    }
}
