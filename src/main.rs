//! HTTP host for the webhook relay.
//!
//! Exposes `POST /webhook` (the trigger), `GET /health`, and Swagger UI at `/swagger-ui`.

use anyhow::Context;
use tracing::{info, warn};
use trigger_relay::infra::{config, telemetry};
use trigger_relay::transport;
use trigger_relay::{RelayConfig, RelayService, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    telemetry::init_tracing();

    // --- Relay Initialization ---
    let relay_config = RelayConfig::from_env();
    match relay_config.target_endpoint_url.as_deref() {
        Some(target) => {
            info!(target_url = %target, timeout = ?relay_config.timeout, "Relay configured")
        }
        None => warn!("TARGET_ENDPOINT_URL is not set; every trigger will answer 500"),
    }
    let relay = RelayService::new(relay_config).context("failed to build relay HTTP client")?;
    let app_state = transport::http::AppState::new(relay);

    // --- API Server Initialization ---
    let server = ServerConfig::from_env()?;
    let app = transport::http::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", server.bind_addr))?;
    info!(addr = %server.bind_addr, "Webhook relay listening");
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
