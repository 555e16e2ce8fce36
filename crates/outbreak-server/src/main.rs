use std::sync::Arc;

use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use outbreak_classifier::{ModelRegistry, Predictor};
use outbreak_server::config::ServerConfig;
use outbreak_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    // Every page needs its model; a missing or unreadable one is fatal.
    let registry = ModelRegistry::load(&config.model_dir).wrap_err_with(|| {
        format!("failed to load models from {}", config.model_dir.display())
    })?;

    let state = AppState {
        predictor: Predictor::new(Arc::new(registry)),
    };

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, outbreak_server::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}
