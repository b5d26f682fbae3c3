//! Cache Entry Module
//!
//! Defines a single stored value together with its expiration deadline.

use std::time::Instant;

use chrono::Duration;

// == Cache Entry ==
/// Represents a single cache entry with value and optional deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic expiration deadline, None = never expires
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructors ==
    /// Creates an entry that never expires.
    pub fn persistent(value: V) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// Creates an entry expiring `ttl` from now.
    ///
    /// A zero or negative `ttl` yields a persistent entry, as does a `ttl`
    /// too large to be represented as a deadline.
    pub fn with_ttl(value: V, ttl: Duration) -> Self {
        let expires_at = if ttl <= Duration::zero() {
            None
        } else {
            ttl.to_std()
                .ok()
                .and_then(|ttl| Instant::now().checked_add(ttl))
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired relative to `now`.
    ///
    /// An entry is expired once `now` is strictly past its deadline. Persistent
    /// entries never expire.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now > deadline,
            None => false,
        }
    }

    /// Checks whether the entry is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}
