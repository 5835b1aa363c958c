//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::env;

use anyhow::Context;
use auth::{AuthAppState, PgAuthRepository, auth_router, authenticate};
use axum::{
    Router, http,
    http::{Method, header},
};
use forum::{ForumAppState, PgForumRepository, forum_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,forum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let var = |key: &str| env::var(key).ok();
    let server = config::server_config(var)?;
    let auth_config = config::auth_config(var)?;
    let forum_config = config::forum_config(var)?;

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_state = AuthAppState::new(PgAuthRepository::new(pool.clone()), &auth_config);
    let forum_state = ForumAppState::new(PgForumRepository::new(pool), forum_config);

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = server
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .merge(auth_router(auth_state.clone()))
        .merge(forum_router(forum_state))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            authenticate::<PgAuthRepository>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", server.addr);

    let listener = TcpListener::bind(server.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
