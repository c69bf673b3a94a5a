use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::diaries::use_cases::attach_images::draft::ImageDraft;
use crate::modules::diaries::use_cases::attach_images::handler::ImageFile;
use crate::shared::core::primitives::Session;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AttachImageParams {
    pub name: String,
}

#[derive(Serialize)]
pub struct AttachImageResponse {
    pub image_urls: Vec<String>,
}

/// Uploads one raw image body. The caller keeps the returned URLs in its own
/// draft until it publishes.
pub async fn handle(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(params): Query<AttachImageParams>,
    body: Bytes,
) -> impl IntoResponse {
    let mut draft = ImageDraft::new();
    let files = vec![ImageFile::new(params.name, body.to_vec())];

    match state.attach_images.handle(&session, &mut draft, files).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(AttachImageResponse {
                image_urls: draft.into_urls(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
