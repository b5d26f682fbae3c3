//! Country Search - country metadata lookup service
//!
//! Looks up country name, capital, currency and population from the REST
//! Countries API and keeps results in an in-memory expiring cache.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use country_search::api::{create_router, serve_with_grace, AppState, SHUTDOWN_GRACE_PERIOD};
use country_search::client::CountryClient;
use country_search::config::Config;
use country_search::service::{CountryCache, CountryService};
use country_search::tasks::{spawn_sweep_task, DEFAULT_SWEEP_INTERVAL};

/// Main entry point for the Country Search service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the lookup cache and start its expiration sweep
/// 4. Build the upstream client, service and router
/// 5. Serve until SIGINT/SIGTERM, drain requests for up to 10s, then stop the sweep
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "country_search=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Country Search API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, timeout={}s, upstream={}, cache_ttl={}s",
        config.server_port, config.timeout, config.rest_countries_url, config.cache_ttl
    );

    let cache = Arc::new(CountryCache::new());
    let sweeper = spawn_sweep_task(cache.clone(), DEFAULT_SWEEP_INTERVAL);
    info!("Cache initialized");

    let client = CountryClient::new(
        &config.rest_countries_url,
        Duration::from_secs(config.timeout),
    )
    .context("failed to build upstream client")?;
    info!("HTTP client initialized");

    let cache_ttl = chrono::Duration::try_seconds(config.cache_ttl)
        .unwrap_or(chrono::Duration::MAX);
    let service = CountryService::new(client, cache, cache_ttl);
    let app = create_router(AppState::new(service));
    info!("API router initialized");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    serve_with_grace(listener, app, shutdown_signal(), SHUTDOWN_GRACE_PERIOD)
        .await
        .context("server error")?;

    sweeper.shutdown().await;
    info!("Server exited gracefully");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
