//! Auth Middleware
//!
//! Resolves `Authorization: Bearer <access token>` into a
//! [`kernel::principal::Principal`] request extension. Requests without a
//! valid token pass through unchanged; handlers that need an actor reject
//! them through the `Principal` extractor.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::principal::Principal;

use crate::domain::repository::{CredentialStore, SessionLedger};
use crate::presentation::handlers::AuthAppState;

/// Extract the bearer credential from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware that authenticates the access token when one is presented
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: CredentialStore + SessionLedger + Clone + Send + Sync + 'static,
{
    let principal = bearer_token(req.headers()).and_then(|token| {
        state
            .sessions
            .authenticate(token)
            .map_err(|e| tracing::debug!(error = %e, "Access token rejected"))
            .ok()
    });

    if let Some(claims) = principal {
        req.extensions_mut()
            .insert(Principal::new(claims.user_id, claims.user_name));
    }

    next.run(req).await
}
