//! SecureFlow Server - Main Entry Point

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use secureflow::{config::Config, constants, create_router, store::SessionStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "secureflow=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    config.validate().context("invalid configuration")?;

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);
    tracing::info!(
        "Classifier: luminance <= {}, min stroke {}px; gate: {}ms",
        config.thresholds.luminance_threshold,
        config.thresholds.min_stroke_size,
        config.gate().min_fill_time.num_milliseconds()
    );

    let state = AppState::new(config.clone());

    // Sweep idle sessions in the background
    spawn_session_sweeper(
        state.store.clone(),
        config.session_ttl_secs,
        config.session_sweep_secs,
    );

    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn spawn_session_sweeper(store: SessionStore, ttl_secs: u64, sweep_secs: u64) {
    let ttl = chrono::Duration::seconds(ttl_secs as i64);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(sweep_secs));
        loop {
            ticker.tick().await;
            if store.is_empty() {
                continue;
            }
            let removed = store.purge_expired(chrono::Utc::now(), ttl);
            if removed > 0 {
                tracing::info!("Expired {} idle session(s), {} active", removed, store.len());
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
