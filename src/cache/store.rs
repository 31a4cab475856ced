//! Cache Store Module
//!
//! Main cache engine: a mutex-guarded HashMap of response bodies plus the
//! handle that owns the background reaper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::CacheEntry;
use crate::error::CacheError;
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache Store ==
/// Key-value storage shared between callers and the reaper.
///
/// Every read, write and sweep takes the same lock for its whole critical
/// section.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: Mutex<HashMap<String, CacheEntry>>,
    /// Maximum entry age before the sweep evicts it
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given TTL.
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Add ==
    /// Inserts or replaces the entry for `key` with a freshly stamped one.
    pub async fn add(&self, key: &str, value: Vec<u8>) {
        let entry = CacheEntry::new(value);
        self.entries.lock().await.insert(key.to_string(), entry);
    }

    // == Get ==
    /// Returns the cached payload for `key`, whatever its age.
    ///
    /// Staleness is only enforced by the sweep, so an entry past its TTL is
    /// still returned until the reaper has removed it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .lock()
            .await
            .get(key)
            .map(|entry| entry.value().to_vec())
    }

    // == Sweep ==
    /// Removes every entry older than the TTL as of `now`.
    ///
    /// Returns the number of entries removed.
    pub(crate) async fn sweep_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now, self.ttl));
        before - entries.len()
    }

    pub(crate) async fn sweep(&self) -> usize {
        self.sweep_at(Instant::now()).await
    }

    #[cfg(test)]
    pub(crate) async fn insert_entry(&self, key: &str, entry: CacheEntry) {
        self.entries.lock().await.insert(key.to_string(), entry);
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

// == Response Cache ==
/// Cloneable handle to an expiring response cache.
///
/// Creating one starts a reaper task that sweeps the store every `ttl`. The
/// reaper stops when [`ResponseCache::shutdown`] is called or when the last
/// handle is dropped.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<CacheStore>,
    reaper: Arc<Mutex<Option<ReaperHandle>>>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a cache whose entries expire after `ttl` and starts its reaper
    /// on the current Tokio runtime.
    ///
    /// # Errors
    /// - `CacheError::InvalidTtl` if `ttl` is zero
    /// - `CacheError::NoRuntime` if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> Result<Self, CacheError> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(ttl));
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(CacheStore::new(ttl));
        let reaper = spawn_reaper(&runtime, Arc::downgrade(&store), ttl);
        debug!("Response cache created with ttl {:?}", ttl);

        Ok(Self {
            store,
            reaper: Arc::new(Mutex::new(Some(reaper))),
        })
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.store.ttl()
    }

    /// Inserts or replaces the payload cached under `key`.
    pub async fn add(&self, key: &str, value: Vec<u8>) {
        self.store.add(key, value).await;
    }

    /// Returns the payload cached under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key).await
    }

    /// Returns the number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Idempotent; shared by every clone of this handle. The cache stays
    /// readable and writable afterwards but entries no longer expire.
    pub async fn shutdown(&self) {
        let reaper = self.reaper.lock().await.take();
        if let Some(reaper) = reaper {
            reaper.stop().await;
        }
    }

    /// Returns true while the reaper task is running.
    pub async fn is_reaping(&self) -> bool {
        self.reaper
            .lock()
            .await
            .as_ref()
            .is_some_and(|reaper| !reaper.is_finished())
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }
}
