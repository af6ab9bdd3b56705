use std::net::SocketAddr;

use anyhow::{Context, Result};
use saarthi_api::{build_app, ServiceConfig};
use saarthi_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("saarthi_api");

    let config = ServiceConfig::from_env();
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        bind = %config.bind,
        transcription = config.stt_url.is_some(),
        synthesis = config.tts_url.is_some(),
        web_root = %config.web_root.display(),
        "saarthi api started"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("saarthi api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
