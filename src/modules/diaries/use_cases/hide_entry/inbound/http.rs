use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::diaries::use_cases::hide_entry::command::HideEntry;
use crate::shared::core::primitives::{EntryId, Session};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(entry_id): Path<EntryId>,
) -> impl IntoResponse {
    let command = HideEntry {
        entry_id,
        requester_id: session.user_id,
    };

    match state.hide_entry.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
