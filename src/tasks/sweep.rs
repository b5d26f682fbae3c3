//! Expiration Sweep Task
//!
//! Background task that periodically removes expired cache entries until it
//! is told to stop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::ExpiringCache;

/// Interval between sweeps in the running service.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Shortest interval the sweep will run at; smaller values are raised to it.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Sweep Handle ==
/// Owns a running sweep task and its stop signal.
///
/// Dropping the handle also stops the task at its next tick boundary, since
/// the loop treats a closed channel as a stop signal.
#[derive(Debug)]
pub struct SweepHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Signals the task to stop and waits for it to finish.
    pub async fn shutdown(self) {
        // Receiver already gone means the task has exited on its own
        let _ = self.stop_tx.send(true);

        if let Err(e) = self.task.await {
            warn!("Sweep task ended abnormally: {}", e);
        }
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a task that calls [`ExpiringCache::purge_expired`] every `interval`.
///
/// The first sweep runs one full interval after spawning. The stop signal is
/// checked between sweeps, so an in-progress sweep always completes.
/// An `interval` below [`MIN_SWEEP_INTERVAL`], including zero, is clamped to it.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(ExpiringCache::<String>::new());
/// let sweeper = spawn_sweep_task(cache.clone(), DEFAULT_SWEEP_INTERVAL);
/// // Later, during shutdown:
/// sweeper.shutdown().await;
/// ```
pub fn spawn_sweep_task<V>(cache: Arc<ExpiringCache<V>>, interval: Duration) -> SweepHandle
where
    V: Clone + Send + Sync + 'static,
{
    let interval = interval.max(MIN_SWEEP_INTERVAL);
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!("Starting expiration sweep with interval of {:?}", interval);

        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = cache.purge_expired();

                    if removed > 0 {
                        info!("Expiration sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Expiration sweep: no expired entries found");
                    }
                }
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Expiration sweep stopped");
    });

    SweepHandle { stop_tx, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as TtlDuration;

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = Arc::new(ExpiringCache::new());
        cache.set_with_expiration("expire_soon", "value", TtlDuration::milliseconds(50));

        let sweeper = spawn_sweep_task(cache.clone(), Duration::from_millis(100));

        // Wait for the entry to expire and at least one sweep to run
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(cache.len(), 0, "Expired entry should have been swept");

        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn test_sweep_preserves_valid_entries() {
        let cache = Arc::new(ExpiringCache::new());
        cache.set_with_expiration("long_lived", "value", TtlDuration::hours(1));
        cache.set("forever", "value");

        let sweeper = spawn_sweep_task(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("long_lived"), Some("value"));
        assert_eq!(cache.get("forever"), Some("value"));

        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_task() {
        let cache: Arc<ExpiringCache<String>> = Arc::new(ExpiringCache::new());

        let sweeper = spawn_sweep_task(cache, DEFAULT_SWEEP_INTERVAL);
        assert!(!sweeper.is_finished());

        // Completes well before the first tick would fire
        tokio::time::timeout(Duration::from_secs(1), sweeper.shutdown())
            .await
            .expect("shutdown should not wait for the next tick");
    }

    #[tokio::test]
    async fn test_zero_interval_is_clamped() {
        let cache = Arc::new(ExpiringCache::new());
        cache.set_with_expiration("expire_soon", 1, TtlDuration::milliseconds(20));

        let sweeper = spawn_sweep_task(cache.clone(), Duration::ZERO);

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!sweeper.is_finished(), "Sweep should still be running");
        assert_eq!(cache.len(), 0, "Expired entry should have been swept");

        tokio::time::timeout(Duration::from_secs(1), sweeper.shutdown())
            .await
            .expect("shutdown should complete promptly");
    }

    #[tokio::test]
    async fn test_no_sweep_after_shutdown() {
        let cache = Arc::new(ExpiringCache::new());
        let sweeper = spawn_sweep_task(cache.clone(), Duration::from_millis(30));
        sweeper.shutdown().await;

        cache.set_with_expiration("stale", 1, TtlDuration::milliseconds(10));
        tokio::time::sleep(Duration::from_millis(120)).await;

        // Hidden from reads but never reclaimed
        assert_eq!(cache.get("stale"), None);
        assert_eq!(cache.len(), 1);
    }
}
