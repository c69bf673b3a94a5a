use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignInBody {
    pub username: String,
    pub password: String,
}

/// Returns the session; its `access_token` goes in `Authorization: Bearer`.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignInBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.sign_in.handle(&body.username, &body.password).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => e.into_response(),
    }
}
