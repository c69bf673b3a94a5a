use axum::{Json, extract::State};

use crate::shared::time::clock::ClockReading;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<ClockReading> {
    Json(state.clock.borrow().clone())
}
