//! Cache Handle Module
//!
//! The owned cache instance: shared store plus the background sweep task
//! whose lifetime is tied to construction and explicit teardown.

use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, Store};
use crate::config::CacheConfig;
use crate::tasks::spawn_sweep_task;

// == Ttl Cache ==
/// An in-process TTL cache keyed by string.
///
/// The store is wrapped in `Arc<RwLock<_>>`, so clones are cheap handles
/// to the same underlying cache and every operation holds the lock for
/// its full read-modify-write sequence. Construction starts the periodic
/// sweep task; [`TtlCache::teardown`] stops it and clears all entries.
///
/// Must be constructed inside a tokio runtime, since the sweep task is
/// spawned onto it.
pub struct TtlCache<V> {
    /// Shared store guarded by a single lock
    store: Arc<RwLock<Store<V>>>,
    /// Handle to the recurring sweep task, taken on teardown
    sweeper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sweeper: Arc::clone(&self.sweeper),
        }
    }
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache with the default configuration
    /// (5 minute default TTL, 10 minute sweep interval).
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache from an explicit configuration and starts its
    /// sweep task.
    pub fn with_config(config: CacheConfig) -> Self {
        let store = Arc::new(RwLock::new(Store::new(config.default_ttl_ms)));
        let sweeper = spawn_sweep_task(Arc::clone(&store), config.sweep_interval_ms);

        Self {
            store,
            sweeper: Arc::new(Mutex::new(Some(sweeper))),
        }
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_ms` - Optional TTL in milliseconds (uses the configured default if None)
    pub async fn set(&self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let mut store = self.store.write().await;
        store.set(key.into(), value, ttl_ms);
    }

    // == Get ==
    /// Returns the stored value if a live entry exists for `key`.
    ///
    /// Takes the write lock: an expired entry found here is evicted as a
    /// side effect.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Contains ==
    /// Returns whether a live entry exists for `key`, with the same
    /// passive-expiration side effect as [`TtlCache::get`].
    pub async fn contains(&self, key: &str) -> bool {
        let mut store = self.store.write().await;
        store.contains(key)
    }

    // == Delete ==
    /// Removes the entry for `key` if present; returns whether an entry
    /// was actually removed.
    pub async fn delete(&self, key: &str) -> bool {
        let mut store = self.store.write().await;
        store.delete(key)
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
    }

    // == Length ==
    /// Returns the count of physically stored entries, including entries
    /// that are expired but not yet swept.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Teardown ==
    /// Stops the periodic sweep and clears all entries.
    ///
    /// After teardown the instance must not be used further; no guard is
    /// installed, so remaining calls operate on an empty store that is no
    /// longer swept.
    pub async fn teardown(&self) {
        if let Ok(mut guard) = self.sweeper.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
                debug!("sweep task stopped");
            }
        }
        self.store.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_set_and_get() {
        let cache = TtlCache::new();

        cache.set("key1", "value1".to_string(), None).await;

        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
        assert_eq!(cache.len().await, 1);

        cache.teardown().await;
    }

    #[tokio::test]
    async fn test_handle_clone_shares_store() {
        let cache = TtlCache::new();
        let other = cache.clone();

        cache.set("key1", 7u32, None).await;

        assert_eq!(other.get("key1").await, Some(7));

        other.teardown().await;
    }

    #[tokio::test]
    async fn test_handle_teardown_clears_entries() {
        let cache = TtlCache::new();

        cache.set("key1", "value1".to_string(), None).await;
        cache.set("key2", "value2".to_string(), None).await;

        cache.teardown().await;

        assert_eq!(cache.len().await, 0);
        assert_eq!(cache.get("key1").await, None);
    }

    #[tokio::test]
    async fn test_handle_teardown_stops_sweeper() {
        let cache: TtlCache<String> = TtlCache::new();

        let handle = {
            let guard = cache.sweeper.lock().unwrap();
            assert!(guard.is_some());
            drop(guard);
            cache.teardown().await;
            cache.sweeper.lock().unwrap().take()
        };

        // The handle was consumed by teardown.
        assert!(handle.is_none());
    }
}
