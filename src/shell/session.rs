// Bearer token resolution for HTTP and GraphQL.

use crate::modules::diaries::errors::ApplicationError;
use crate::shared::core::primitives::Session;
use crate::shell::state::AppState;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// `Ok(None)` when no token was sent or the token is unknown.
pub async fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<Session>, ApplicationError> {
    match bearer_token(headers) {
        Some(token) => Ok(state.auth.get_session(token).await?),
        None => Ok(None),
    }
}

/// Rejects the request with 401 unless it carries a live session, which is
/// then available to handlers as `Extension<Session>`.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApplicationError> {
    let session = resolve_session(&state, req.headers())
        .await?
        .ok_or(ApplicationError::AuthRequired)?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
