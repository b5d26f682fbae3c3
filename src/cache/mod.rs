//! Cache Module
//!
//! Provides a thread-safe in-memory cache with per-entry expiration.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::ExpiringCache;
