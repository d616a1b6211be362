use anyhow::Context;
use std::net::SocketAddr;
use tracing::info;

use cms_api::{build_router, AppState};
use cms_shared::config::AppConfig;
use cms_shared::telemetry::init_telemetry;

mod bootstrap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_telemetry(&config.log).context("Failed to initialise logging")?;

    info!(
        "{} starting (env: {}, storage: {:?})",
        config.app.name, config.app.env, config.storage.backend
    );

    let stores = bootstrap::content_stores(&config).await?;
    let state = AppState::new(config.clone(), stores);
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config
        .app
        .host
        .parse()
        .with_context(|| format!("Invalid app.host: {}", config.app.host))?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
