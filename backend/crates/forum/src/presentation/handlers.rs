//! HTTP Handlers
//!
//! Write endpoints require a [`Principal`] placed in the request extensions
//! by the auth middleware. Path ids that are not UUIDs resolve to the nil id,
//! which no stored row carries, so they surface as not-found after payload
//! validation.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::envelope::Envelope;
use kernel::id::Id;
use kernel::principal::Principal;
use uuid::Uuid;

use crate::application::{
    AddCommentInput, AddCommentUseCase, AddReplyInput, AddReplyUseCase, AddThreadInput,
    AddThreadUseCase, DeleteCommentUseCase, DeleteReplyUseCase, ForumConfig,
    GetThreadDetailUseCase,
};
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;
use crate::presentation::dto::{
    AddCommentResponse, AddReplyResponse, AddThreadRequest, AddThreadResponse, AddedContentDto,
    AddedThreadDto, ContentRequest, ThreadDetailResponse,
};

/// Shared state for forum handlers
pub struct ForumAppState<R>
where
    R: ForumRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<ForumConfig>,
}

impl<R> Clone for ForumAppState<R>
where
    R: ForumRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

fn path_id<T>(raw: &str) -> Id<T> {
    Id::parse_str(raw).unwrap_or_else(|| Id::from_uuid(Uuid::nil()))
}

// ============================================================================
// Threads
// ============================================================================

/// POST /threads
pub async fn add_thread<R>(
    State(state): State<ForumAppState<R>>,
    principal: Principal,
    payload: Result<Json<AddThreadRequest>, JsonRejection>,
) -> ForumResult<(StatusCode, Json<Envelope<AddThreadResponse>>)>
where
    R: ForumRepository,
{
    let Json(req) = payload?;

    let use_case = AddThreadUseCase::new(state.repo.clone());
    let input = AddThreadInput {
        title: req.title.unwrap_or_default(),
        body: req.body.unwrap_or_default(),
    };

    let added = use_case.execute(&principal.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(AddThreadResponse {
            added_thread: AddedThreadDto {
                id: added.id.to_string(),
                title: added.title,
                owner: added.owner.to_string(),
            },
        })),
    ))
}

/// GET /threads/{thread_id}
pub async fn get_thread<R>(
    State(state): State<ForumAppState<R>>,
    Path(thread_id): Path<String>,
) -> ForumResult<Json<Envelope<ThreadDetailResponse>>>
where
    R: ForumRepository,
{
    let use_case = GetThreadDetailUseCase::new(state.repo.clone(), state.config.clone());

    let view = use_case.execute(&path_id(&thread_id)).await?;

    Ok(Json(Envelope::success(ThreadDetailResponse {
        thread: view.into(),
    })))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /threads/{thread_id}/comments
pub async fn add_comment<R>(
    State(state): State<ForumAppState<R>>,
    principal: Principal,
    Path(thread_id): Path<String>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> ForumResult<(StatusCode, Json<Envelope<AddCommentResponse>>)>
where
    R: ForumRepository,
{
    let Json(req) = payload?;

    let use_case = AddCommentUseCase::new(state.repo.clone());
    let input = AddCommentInput {
        content: req.content.unwrap_or_default(),
    };

    let added = use_case
        .execute(&principal.user_id, &path_id(&thread_id), input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(AddCommentResponse {
            added_comment: AddedContentDto {
                id: added.id.to_string(),
                content: added.content,
                owner: added.owner.to_string(),
            },
        })),
    ))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment<R>(
    State(state): State<ForumAppState<R>>,
    principal: Principal,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ForumResult<Json<Envelope<()>>>
where
    R: ForumRepository,
{
    let use_case = DeleteCommentUseCase::new(state.repo.clone());

    use_case
        .execute(
            &principal.user_id,
            &path_id(&thread_id),
            &path_id(&comment_id),
        )
        .await?;

    Ok(Json(Envelope::empty()))
}

// ============================================================================
// Replies
// ============================================================================

/// POST /threads/{thread_id}/comments/{comment_id}/replies
pub async fn add_reply<R>(
    State(state): State<ForumAppState<R>>,
    principal: Principal,
    Path((thread_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> ForumResult<(StatusCode, Json<Envelope<AddReplyResponse>>)>
where
    R: ForumRepository,
{
    let Json(req) = payload?;

    let use_case = AddReplyUseCase::new(state.repo.clone());
    let input = AddReplyInput {
        content: req.content.unwrap_or_default(),
    };

    let added = use_case
        .execute(
            &principal.user_id,
            &path_id(&thread_id),
            &path_id(&comment_id),
            input,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(AddReplyResponse {
            added_reply: AddedContentDto {
                id: added.id.to_string(),
                content: added.content,
                owner: added.owner.to_string(),
            },
        })),
    ))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn delete_reply<R>(
    State(state): State<ForumAppState<R>>,
    principal: Principal,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> ForumResult<Json<Envelope<()>>>
where
    R: ForumRepository,
{
    let use_case = DeleteReplyUseCase::new(state.repo.clone());

    use_case
        .execute(
            &principal.user_id,
            &path_id(&thread_id),
            &path_id(&comment_id),
            &path_id(&reply_id),
        )
        .await?;

    Ok(Json(Envelope::empty()))
}
