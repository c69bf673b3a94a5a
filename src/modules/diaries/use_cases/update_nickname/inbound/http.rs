use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::Session;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateNicknameBody {
    pub nickname: String,
}

#[derive(Serialize)]
pub struct UpdateNicknameResponse {
    pub nickname: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    body: Result<Json<UpdateNicknameBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.update_nickname.handle(&session, &body.nickname).await {
        Ok(nickname) => Json(UpdateNicknameResponse { nickname }).into_response(),
        Err(e) => e.into_response(),
    }
}
