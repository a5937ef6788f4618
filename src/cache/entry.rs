//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry: the stored value plus the metadata needed to
/// decide whether it is still live.
///
/// The value is owned exclusively by the entry. A `set` on the same key
/// replaces the whole entry rather than mutating it in place, so readers
/// can never observe a half-updated entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub data: V,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Time-to-live in milliseconds
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    ///
    /// # Arguments
    /// * `data` - The value to store
    /// * `ttl_ms` - TTL in milliseconds
    pub fn new(data: V, ttl_ms: u64) -> Self {
        Self {
            data,
            stored_at: current_timestamp_ms(),
            ttl_ms,
        }
    }

    // == Is Live ==
    /// Checks whether the entry is still live.
    ///
    /// Boundary condition: an entry whose age equals its TTL exactly is
    /// still live; it expires once `now - stored_at` is strictly greater
    /// than `ttl_ms`. A TTL of zero therefore expires as soon as the
    /// clock advances past the insertion millisecond.
    pub fn is_live(&self) -> bool {
        self.is_live_at(current_timestamp_ms())
    }

    /// Live-ness check against an explicit clock reading.
    ///
    /// Saturating subtraction keeps the check total if the wall clock
    /// reads earlier than `stored_at`.
    pub fn is_live_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at) <= self.ttl_ms
    }

    // == Remaining TTL ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn remaining_ms(&self) -> u64 {
        let deadline = self.stored_at.saturating_add(self.ttl_ms);
        deadline.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
