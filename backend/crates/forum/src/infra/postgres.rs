//! PostgreSQL Repository Implementations
//!
//! Author names are joined from `users` at read time. Listings order by
//! `created_at ASC` with the primary key as tie-breaker.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

use crate::domain::entity::{comment::Comment, reply::Reply, thread::Thread};
use crate::domain::repository::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::domain::view::{CommentRecord, ReplyRecord, ThreadRecord};
use crate::error::{ForumError, ForumResult};

/// PostgreSQL-backed forum repository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Thread Repository Implementation
// ============================================================================

impl ThreadRepository for PgForumRepository {
    async fn add_thread(&self, thread: &Thread) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO threads (
                thread_id,
                title,
                body,
                owner,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(thread.thread_id.as_uuid())
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.owner.as_uuid())
        .bind(thread.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn thread_exists(&self, thread_id: &ThreadId) -> ForumResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE thread_id = $1)",
        )
        .bind(thread_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_thread(&self, thread_id: &ThreadId) -> ForumResult<Option<ThreadRecord>> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT t.thread_id, t.title, t.body, u.user_name, t.created_at
            FROM threads t
            INNER JOIN users u ON u.user_id = t.owner
            WHERE t.thread_id = $1
            "#,
        )
        .bind(thread_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ThreadRow::into_record))
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgForumRepository {
    async fn add_comment(&self, comment: &Comment) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                thread_id,
                content,
                owner,
                created_at,
                is_deleted
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.thread_id.as_uuid())
        .bind(&comment.content)
        .bind(comment.owner.as_uuid())
        .bind(comment.created_at)
        .bind(comment.is_deleted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn comment_exists(&self, comment_id: &CommentId) -> ForumResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE comment_id = $1 AND is_deleted = FALSE)",
        )
        .bind(comment_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_comment_owner(&self, comment_id: &CommentId) -> ForumResult<Option<UserId>> {
        let owner = sqlx::query_scalar::<_, Uuid>(
            "SELECT owner FROM comments WHERE comment_id = $1 AND is_deleted = FALSE",
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner.map(UserId::from_uuid))
    }

    async fn soft_delete_comment(&self, comment_id: &CommentId) -> ForumResult<()> {
        let updated = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(ForumError::CommentNotFound);
        }
        Ok(())
    }

    async fn list_comments_by_thread(
        &self,
        thread_id: &ThreadId,
    ) -> ForumResult<Vec<CommentRecord>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.comment_id, u.user_name, c.content, c.created_at, c.is_deleted
            FROM comments c
            INNER JOIN users u ON u.user_id = c.owner
            WHERE c.thread_id = $1
            ORDER BY c.created_at ASC, c.comment_id ASC
            "#,
        )
        .bind(thread_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_record).collect())
    }
}

// ============================================================================
// Reply Repository Implementation
// ============================================================================

impl ReplyRepository for PgForumRepository {
    async fn add_reply(&self, reply: &Reply) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO replies (
                reply_id,
                comment_id,
                content,
                owner,
                created_at,
                is_deleted
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reply.reply_id.as_uuid())
        .bind(reply.comment_id.as_uuid())
        .bind(&reply.content)
        .bind(reply.owner.as_uuid())
        .bind(reply.created_at)
        .bind(reply.is_deleted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn reply_exists(&self, reply_id: &ReplyId) -> ForumResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE reply_id = $1 AND is_deleted = FALSE)",
        )
        .bind(reply_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_reply_owner(&self, reply_id: &ReplyId) -> ForumResult<Option<UserId>> {
        let owner = sqlx::query_scalar::<_, Uuid>(
            "SELECT owner FROM replies WHERE reply_id = $1 AND is_deleted = FALSE",
        )
        .bind(reply_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner.map(UserId::from_uuid))
    }

    async fn soft_delete_reply(&self, reply_id: &ReplyId) -> ForumResult<()> {
        let updated = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE reply_id = $1")
            .bind(reply_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(ForumError::ReplyNotFound);
        }
        Ok(())
    }

    async fn list_replies_by_comment(
        &self,
        comment_id: &CommentId,
    ) -> ForumResult<Vec<ReplyRecord>> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT r.reply_id, u.user_name, r.content, r.created_at, r.is_deleted
            FROM replies r
            INNER JOIN users u ON u.user_id = r.owner
            WHERE r.comment_id = $1
            ORDER BY r.created_at ASC, r.reply_id ASC
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReplyRow::into_record).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ThreadRow {
    thread_id: Uuid,
    title: String,
    body: String,
    user_name: String,
    created_at: DateTime<Utc>,
}

impl ThreadRow {
    fn into_record(self) -> ThreadRecord {
        ThreadRecord {
            thread_id: ThreadId::from_uuid(self.thread_id),
            title: self.title,
            body: self.body,
            username: self.user_name,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    user_name: String,
    content: String,
    created_at: DateTime<Utc>,
    is_deleted: bool,
}

impl CommentRow {
    fn into_record(self) -> CommentRecord {
        CommentRecord {
            comment_id: CommentId::from_uuid(self.comment_id),
            username: self.user_name,
            content: self.content,
            created_at: self.created_at,
            is_deleted: self.is_deleted,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReplyRow {
    reply_id: Uuid,
    user_name: String,
    content: String,
    created_at: DateTime<Utc>,
    is_deleted: bool,
}

impl ReplyRow {
    fn into_record(self) -> ReplyRecord {
        ReplyRecord {
            reply_id: ReplyId::from_uuid(self.reply_id),
            username: self.user_name,
            content: self.content,
            created_at: self.created_at,
            is_deleted: self.is_deleted,
        }
    }
}
