//! Cache Store Module
//!
//! Synchronous cache core combining HashMap storage with TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Store ==
/// Key/value storage with per-entry TTL.
///
/// The entries map is the sole shared mutable resource; it is owned
/// exclusively by the store, and callers serialize access through an
/// outer lock (see [`TtlCache`](crate::TtlCache)). Expired entries are
/// evicted passively on read and actively by [`Store::sweep_expired`];
/// until one of those runs they still count toward [`Store::len`].
#[derive(Debug)]
pub struct Store<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in milliseconds applied when the caller does not specify one
    default_ttl_ms: u64,
}

impl<V: Clone> Store<V> {
    // == Constructor ==
    /// Creates a new Store with the given default TTL.
    ///
    /// # Arguments
    /// * `default_ttl_ms` - TTL in milliseconds for entries without an explicit TTL
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the whole entry is replaced: value,
    /// insertion timestamp, and TTL. Nothing signals whether a prior
    /// entry existed. A TTL of 0 means the entry expires on the next
    /// clock tick.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_ms` - Optional TTL in milliseconds (uses the default if None)
    pub fn set(&mut self, key: String, value: V, ttl_ms: Option<u64>) {
        let effective_ttl = ttl_ms.unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(value, effective_ttl);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value only if an entry exists and is live. An expired
    /// entry found here is evicted immediately (passive expiration) so
    /// subsequent lookups do not repeat the staleness check. A miss is a
    /// normal `None`, never an error.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_live() => {
                let value = entry.data.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.evict_expired(key);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Returns whether a live entry exists for `key`.
    ///
    /// Applies the same passive-expiration side effect as [`Store::get`]
    /// but does not touch the value.
    pub fn contains(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_live() => {
                self.stats.record_hit();
                true
            }
            Some(_) => {
                self.evict_expired(key);
                self.stats.record_miss();
                false
            }
            None => {
                self.stats.record_miss();
                false
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was actually removed; deleting an absent
    /// key is not an error.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Sweep Expired ==
    /// Removes every entry that is not live at scan time.
    ///
    /// Never removes a live entry. Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_live())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_swept(count as u64);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically stored entries.
    ///
    /// Expired-but-unswept entries are included: this is a storage
    /// occupancy metric, not a live-entry count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops an entry found expired on the read path.
    fn evict_expired(&mut self, key: &str) {
        self.entries.remove(key);
        self.stats.record_expired();
        self.stats.set_total_entries(self.entries.len());
    }
}
