use std::sync::Arc;

use anyhow::Result;
use mlpipe_runner::PipelineRunner;
use mlpipe_server::config::ServerConfig;
use mlpipe_server::{app, ServerState};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let state = Arc::new(ServerState {
        runner: PipelineRunner::with_delay(config.pipeline_delay),
    });

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves once Ctrl-C (SIGINT) is received.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received; shutting down"),
        Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
    }
}
