use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use diary_feed::shared::infrastructure::backend::in_memory::InMemoryBackend;
use diary_feed::shared::time::ticker::ClockTicker;
use diary_feed::shell::config::AppConfig;
use diary_feed::shell::http::router;
use diary_feed::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diary_feed=info,tower_http=info".into()),
        )
        .init();

    let backend = Arc::new(InMemoryBackend::default());
    for account in &config.accounts {
        let email = format!("{}@{}", account.username, config.login_domain);
        backend.register_account(&email, &account.password, None).await;
        info!(%email, "seeded account");
    }
    if config.accounts.is_empty() {
        warn!("no DIARY_ACCOUNTS configured, nobody can sign in");
    }

    let ticker = ClockTicker::spawn(
        vec![config.zones.source, config.zones.target],
        config.meeting_at,
        config.clock_schedule,
    );
    let state = AppState::in_memory(backend, &config, ticker.subscribe());
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("diary feed listening on http://{addr} (GraphQL at /gql)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    ticker.shutdown().await;
    info!("diary feed stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
}
