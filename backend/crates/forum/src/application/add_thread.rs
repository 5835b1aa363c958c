//! Add Thread Use Case

use std::sync::Arc;

use kernel::id::{ThreadId, UserId};

use crate::domain::entity::thread::Thread;
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;

/// Add thread input (an empty string stands for a missing field)
pub struct AddThreadInput {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct AddedThread {
    pub id: ThreadId,
    pub title: String,
    pub owner: UserId,
}

pub struct AddThreadUseCase<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
}

impl<R> AddThreadUseCase<R>
where
    R: ForumRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, actor: &UserId, input: AddThreadInput) -> ForumResult<AddedThread> {
        let thread = Thread::new(input.title, input.body, *actor)?;

        self.repo.add_thread(&thread).await?;

        tracing::info!(
            thread_id = %thread.thread_id,
            owner = %thread.owner,
            "Thread created"
        );

        Ok(AddedThread {
            id: thread.thread_id,
            title: thread.title,
            owner: thread.owner,
        })
    }
}
