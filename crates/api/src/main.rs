use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use sitetrack_api::config::ServerConfig;
use sitetrack_api::error::StartupError;
use sitetrack_api::router::build_app_router;
use sitetrack_api::state::AppState;
use sitetrack_db::{Seed, Store};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sitetrack_api=debug,sitetrack_db=debug,sitetrack_events=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        seed_dir = %config.seed_dir.display(),
        latency_min_ms = config.latency.min_ms(),
        latency_max_ms = config.latency.max_ms(),
        "Loaded server configuration"
    );

    // --- Store ---
    let seed = Seed::from_dir(&config.seed_dir)?;
    let store = Store::new(seed, config.latency);
    tracing::info!(records = sitetrack_db::health_check(&store).await, "Store ready");

    // --- App state and event services ---
    let state = AppState::new(store, config.clone());

    let notice_cancel = CancellationToken::new();
    let notice_handle = {
        let notices = state.notices.clone();
        let receiver = state.event_bus.subscribe();
        let cancel = notice_cancel.clone();
        tokio::spawn(async move { notices.run(receiver, cancel).await })
    };
    tracing::info!("Notice log started");

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let ip = config
        .host
        .parse::<IpAddr>()
        .map_err(|e| StartupError::address(&config, e))?;
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");
    notice_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), notice_handle).await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM (on Unix) to begin graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
