//! Get Thread Detail Use Case
//!
//! スレッド・コメント・リプライを入れ子の読み取りモデルに組み立てる。
//!
//! - コメントごとのリプライ取得は並行実行（同時実行数は `ForumConfig` で制限）
//! - 全取得の完了を待ってから返す。1件でも失敗したら全体を失敗にする
//! - 並び順はリポジトリの返す順（作成日時の昇順）で、完了順には依存しない

use std::sync::Arc;

use kernel::id::{CommentId, ThreadId};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::application::config::ForumConfig;
use crate::domain::repository::ForumRepository;
use crate::domain::view::{CommentView, ReplyRecord, ReplyView, ThreadView};
use crate::error::{ForumError, ForumResult};

pub struct GetThreadDetailUseCase<R>
where
    R: ForumRepository,
{
    repo: Arc<R>,
    config: Arc<ForumConfig>,
}

impl<R> GetThreadDetailUseCase<R>
where
    R: ForumRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ForumConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, thread_id: &ThreadId) -> ForumResult<ThreadView> {
        let thread = self
            .repo
            .find_thread(thread_id)
            .await?
            .ok_or(ForumError::ThreadNotFound)?;

        let comments = self.repo.list_comments_by_thread(thread_id).await?;

        let comment_ids: Vec<CommentId> = comments.iter().map(|c| c.comment_id).collect();
        let replies = self.fetch_replies(comment_ids).await?;

        let comments: Vec<CommentView> = comments
            .into_iter()
            .zip(replies)
            .map(|(comment, replies)| {
                let replies = replies
                    .into_iter()
                    .map(|r| ReplyView::from_record(r, &self.config.deleted_reply_placeholder))
                    .collect();
                CommentView::from_record(comment, &self.config.deleted_comment_placeholder, replies)
            })
            .collect();

        tracing::debug!(
            thread_id = %thread_id,
            comment_count = comments.len(),
            "Thread detail assembled"
        );

        Ok(ThreadView::assemble(thread, comments))
    }

    /// Fetch replies for every comment concurrently.
    ///
    /// The result is indexed like `comment_ids`. The first failure aborts the
    /// remaining fetches and is returned as is.
    async fn fetch_replies(&self, comment_ids: Vec<CommentId>) -> ForumResult<Vec<Vec<ReplyRecord>>> {
        let semaphore = Arc::new(Semaphore::new(self.config.reply_fetch_concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for (index, comment_id) in comment_ids.iter().copied().enumerate() {
            let repo = self.repo.clone();
            let semaphore = semaphore.clone();
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire()
                    .await
                    .map_err(|_| ForumError::Internal("reply fetch limiter closed".into()))?;
                let replies = repo.list_replies_by_comment(&comment_id).await?;
                Ok::<_, ForumError>((index, replies))
            });
        }

        let mut slots: Vec<Option<Vec<ReplyRecord>>> = comment_ids.iter().map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|e| ForumError::Internal(format!("reply fetch task failed: {e}")))
                .and_then(|result| result);

            match outcome {
                Ok((index, replies)) => slots[index] = Some(replies),
                Err(e) => {
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.ok_or_else(|| ForumError::Internal("missing reply fetch result".into())))
            .collect()
    }
}
