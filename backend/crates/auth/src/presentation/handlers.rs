//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use kernel::envelope::Envelope;

use crate::application::{
    LoginInput, LogoutInput, RefreshInput, RegisterInput, SessionManager,
};
use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::error::{AuthError, AuthResult};
use crate::infra::{Argon2PasswordHasher, JwtTokenService};
use crate::presentation::dto::{
    AddedUser, LoginRequest, LoginResponse, RefreshResponse, RefreshTokenRequest,
    RegisterRequest, RegisterResponse,
};

/// Session manager wired with the production token service and hasher
pub type Sessions<R> = SessionManager<R, JwtTokenService, Argon2PasswordHasher>;

/// Shared state for auth handlers and the access-token middleware
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    pub sessions: Sessions<R>,
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

// ============================================================================
// Users
// ============================================================================

/// POST /users
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<Envelope<RegisterResponse>>)>
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let input = RegisterInput {
        username: req.username.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
        fullname: req.fullname.unwrap_or_default(),
    };

    let user = state.sessions.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(RegisterResponse {
            added_user: AddedUser {
                id: user.user_id.to_string(),
                username: user.username,
                fullname: user.fullname,
            },
        })),
    ))
}

// ============================================================================
// Authentications
// ============================================================================

/// POST /authentications
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<Envelope<LoginResponse>>)>
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let input = LoginInput {
        username: req.username.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = state.sessions.login(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(LoginResponse {
            access_token: output.access_token,
            refresh_token: output.refresh_token,
        })),
    ))
}

/// PUT /authentications
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> AuthResult<Json<Envelope<RefreshResponse>>>
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let access_token = state
        .sessions
        .refresh(RefreshInput {
            refresh_token: req.refresh_token.unwrap_or_default(),
        })
        .await?;

    Ok(Json(Envelope::success(RefreshResponse { access_token })))
}

/// DELETE /authentications
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> AuthResult<Json<Envelope<()>>>
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    state
        .sessions
        .logout(LogoutInput {
            refresh_token: req.refresh_token.unwrap_or_default(),
        })
        .await?;

    Ok(Json(Envelope::empty()))
}
