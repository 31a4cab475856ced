//! Cache Entry Module
//!
//! Defines a single cached response body and its insertion time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached payload stamped with the instant it was inserted.
///
/// Entries are never mutated; re-inserting a key replaces the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Insertion time (monotonic clock)
    created_at: Instant,
    /// The cached response body
    value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    pub(crate) fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { created_at, value }
    }

    /// Returns the cached payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the insertion instant.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Age of the entry as observed at `now`. Saturates to zero if `now`
    /// precedes the insertion instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry is older than `ttl` at `now`.
    ///
    /// An entry whose age equals `ttl` exactly is still live.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
