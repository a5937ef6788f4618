//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Passive expiration only reclaims keys that are read again; the sweep
//! bounds growth from keys that are written once and never read.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Store;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the configured
/// interval between passes. Each pass acquires the write lock and runs
/// to completion; it has no cancellation point mid-sweep, so the only
/// way to stop it is aborting the returned handle, which
/// [`TtlCache::teardown`](crate::TtlCache::teardown) does.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `sweep_interval_ms` - Interval in milliseconds between passes
pub fn spawn_sweep_task<V>(
    store: Arc<RwLock<Store<V>>>,
    sweep_interval_ms: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_millis(sweep_interval_ms);

    tokio::spawn(async move {
        debug!("sweep task started, interval {} ms", sweep_interval_ms);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep_expired()
            };

            if removed > 0 {
                info!("sweep pass removed {} expired entries", removed);
            } else {
                debug!("sweep pass found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let store = Arc::new(RwLock::new(Store::new(300_000)));

        {
            let mut guard = store.write().await;
            guard.set("expire_soon".to_string(), "value".to_string(), Some(0));
        }

        // Sweep every 50 ms
        let handle = spawn_sweep_task(Arc::clone(&store), 50);

        tokio::time::sleep(Duration::from_millis(200)).await;

        // No read touched the key; the sweep alone reclaimed it.
        {
            let guard = store.read().await;
            assert_eq!(guard.len(), 0, "expired entry should have been swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let store = Arc::new(RwLock::new(Store::new(300_000)));

        {
            let mut guard = store.write().await;
            guard.set("long_lived".to_string(), "value".to_string(), Some(3_600_000));
        }

        let handle = spawn_sweep_task(Arc::clone(&store), 50);

        tokio::time::sleep(Duration::from_millis(200)).await;

        {
            let mut guard = store.write().await;
            assert_eq!(guard.get("long_lived"), Some("value".to_string()));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let store: Arc<RwLock<Store<String>>> = Arc::new(RwLock::new(Store::new(300_000)));

        let handle = spawn_sweep_task(store, 50);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
