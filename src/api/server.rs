//! HTTP Server
//!
//! Runs the router until a shutdown signal arrives, then gives in-flight
//! requests a bounded amount of time to finish.

use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

/// Time in-flight requests get to finish once shutdown begins.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Serves `app` on `listener` until `signal` completes.
///
/// After `signal` fires, new connections are refused and open requests are
/// drained. If they have not finished within `grace`, serving stops anyway
/// and the remaining connections are dropped.
pub async fn serve_with_grace<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (started_tx, mut started_rx) = watch::channel(false);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            let _ = started_tx.send(true);
        })
        .into_future();

    let grace_elapsed = async move {
        // Sender only drops once the server future has finished
        if started_rx.changed().await.is_err() {
            return std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            info!("All connections drained");
            result
        }
        _ = grace_elapsed => {
            warn!("Graceful shutdown exceeded {:?}, dropping open connections", grace);
            Ok(())
        }
    }
}
