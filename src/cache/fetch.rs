//! Cache-aside fetch
//!
//! Checks the cache before invoking a loader, and stores only successful loads.

use std::future::Future;

use tracing::debug;

use crate::cache::ResponseCache;

impl ResponseCache {
    // == Fetch Or Load ==
    /// Returns the payload cached under `key`, or awaits `loader` on a miss.
    ///
    /// A successful load is cached before it is returned. A failed load is
    /// returned unchanged and leaves the cache untouched, so the next call
    /// runs the loader again. The cache lock is never held while the loader
    /// runs.
    pub async fn fetch_or_load<F, Fut, E>(&self, key: &str, loader: F) -> Result<Vec<u8>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, E>>,
    {
        if let Some(cached) = self.get(key).await {
            debug!("Cache hit for {}", key);
            return Ok(cached);
        }

        debug!("Cache miss for {}", key);
        let value = loader().await?;
        self.add(key, value.clone()).await;
        Ok(value)
    }
}
