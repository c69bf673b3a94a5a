use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::diaries::use_cases::publish_entry::command::PublishEntry;
use crate::shared::core::primitives::{EntryId, Session};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PublishEntryBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Serialize)]
pub struct PublishEntryResponse {
    pub entry_id: EntryId,
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    body: Result<Json<PublishEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = PublishEntry {
        author_id: session.user_id,
        content: body.content,
        image_urls: body.image_urls,
        submitted_at: Utc::now(),
    };

    match state.publish_entry.handle(command).await {
        Ok(entry_id) => (StatusCode::CREATED, Json(PublishEntryResponse { entry_id })).into_response(),
        Err(e) => e.into_response(),
    }
}
