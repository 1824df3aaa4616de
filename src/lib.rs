pub mod core;

use crate::core::config::{AppConfig, ConfigError};
use crate::core::server::{build_router, route_paths, AppState};
use crate::core::upstream::fetcher::{build_client, UpstreamError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build upstream client: {0}")]
    Client(#[from] UpstreamError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run() -> Result<(), AppError> {
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let config = AppConfig::from_env()?;
    let client = build_client(config.upstream_timeout)?;
    let router = build_router(AppState::new(client, &config), &config.comics);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream_base_url,
        policy = ?config.failure_policy,
        routes = ?route_paths(&config.comics),
        "serving comic feeds"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %error, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
}
