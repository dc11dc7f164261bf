use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;

use sl_api::app::{create_app, AppState, InMemoryShortener};
use sl_api::telemetry::init_tracing;
use sl_core::repositories::{
    InMemoryLinkRepository, InMemorySessionRepository, InMemoryUserRepository,
};
use sl_core::services::ShortenerConfig;
use sl_shared::config::AppConfig;

/// How often expired sessions are swept
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);

    tracing::info!(
        environment = %config.environment,
        "Starting Shortlink API Server"
    );

    let shortener: Arc<InMemoryShortener> = Arc::new(
        InMemoryShortener::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryLinkRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
            ShortenerConfig::from(&config),
        )
        .context("failed to initialise services")?,
    );

    if shortener.session_max_age_seconds().is_some() {
        spawn_session_purge(shortener.clone());
    }

    let app_state = web::Data::new(AppState::new(shortener, &config));
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn spawn_session_purge(shortener: Arc<InMemoryShortener>) {
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(err) = shortener.purge_expired_sessions().await {
                tracing::warn!(error = %err, "Session purge failed");
            }
        }
    });
}
