//! Expiring Cache Module
//!
//! Thread-safe key/value store with per-entry expiration. Expired entries are
//! hidden from reads immediately and physically removed by `purge_expired`,
//! which the background sweep calls on a fixed interval.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Duration;
use parking_lot::RwLock;

use crate::cache::CacheEntry;

// == Expiring Cache ==
/// In-memory cache keyed by string, holding one value type per instance.
///
/// Reads take a shared lock and may run concurrently. Every mutation,
/// including the sweep, takes the exclusive lock. No operation can fail.
#[derive(Debug)]
pub struct ExpiringCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> ExpiringCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if present and not expired.
    ///
    /// Expired entries are reported as absent but left in place; they are
    /// reclaimed by the next sweep or overwritten by the next `set`.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key` with no expiration, replacing any prior entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.insert(key.into(), CacheEntry::persistent(value));
    }

    // == Set With Expiration ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// A zero or negative `ttl` behaves exactly like [`ExpiringCache::set`].
    pub fn set_with_expiration(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.insert(key.into(), CacheEntry::with_ttl(value, ttl));
    }

    fn insert(&self, key: String, entry: CacheEntry<V>) {
        // Entry is built before the lock so the write is a single replacement
        self.entries.write().insert(key, entry);
    }

    // == Delete ==
    /// Removes the entry for `key`. Absent keys are a no-op.
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    // == Purge Expired ==
    /// Removes every entry whose deadline lies before the start of the scan.
    ///
    /// Holds the exclusive lock for the whole scan. Returns the number of
    /// entries removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Clone> Default for ExpiringCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
