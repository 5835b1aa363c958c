//! Forum Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::application::ForumConfig;
use crate::domain::repository::ForumRepository;
use crate::presentation::handlers::{self, ForumAppState};

impl<R> ForumAppState<R>
where
    R: ForumRepository,
{
    pub fn new(repo: R, config: ForumConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// Create the Forum router (`/threads/...`)
///
/// Write routes expect the auth middleware to run in front of this router.
pub fn forum_router<R>(state: ForumAppState<R>) -> Router
where
    R: ForumRepository,
{
    Router::new()
        .route("/threads", post(handlers::add_thread::<R>))
        .route("/threads/{thread_id}", get(handlers::get_thread::<R>))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::add_comment::<R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::delete_comment::<R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::add_reply::<R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::delete_reply::<R>),
        )
        .with_state(state)
}
