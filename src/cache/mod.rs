//! Cache Module
//!
//! Provides in-memory key/value storage with per-entry TTL expiration.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::TtlCache;
pub use stats::CacheStats;
pub use store::Store;

// == Public Constants ==
/// Default TTL applied when a caller does not specify one (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Default interval between background sweep passes (10 minutes)
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 600_000;
