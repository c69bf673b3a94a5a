use crate::shared::core::primitives::Session;
use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
use crate::shared::time::clock::tick_clock;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;

/// Default configuration wired onto `backend`, with a frozen clock reading.
pub fn make_test_state(backend: Arc<InMemoryBackend>) -> AppState {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let zones = [config.zones.source, config.zones.target];
    let (_, clock) = watch::channel(tick_clock(Utc::now(), &zones, &config.meeting_at));
    AppState::in_memory(backend, &config, clock)
}

pub fn make_session(user_id: &str) -> Session {
    Session::new(user_id, format!("{user_id}@local.com"), format!("token-{user_id}"))
}
