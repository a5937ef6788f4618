//! ttl_store - An in-process TTL cache
//!
//! Each entry carries an independent expiration deadline. Stale entries
//! are evicted passively when they are read and actively by a periodic
//! background sweep, so reads never observe an expired value and
//! write-only keys are eventually reclaimed.
//!
//! A [`TtlCache`] is explicitly constructed and owned; construction
//! starts the sweep task and [`TtlCache::teardown`] stops it.
//!
//! ```no_run
//! use ttl_store::TtlCache;
//!
//! # async fn demo() {
//! let cache: TtlCache<String> = TtlCache::new();
//!
//! cache.set("session:abc", "data".to_string(), Some(60_000)).await;
//! assert_eq!(cache.get("session:abc").await, Some("data".to_string()));
//!
//! cache.teardown().await;
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, Store, TtlCache};
pub use config::CacheConfig;
pub use tasks::spawn_sweep_task;
