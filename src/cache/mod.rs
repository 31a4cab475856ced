//! Cache Module
//!
//! Provides an in-memory response cache with sweep-driven TTL expiration.

mod entry;
mod fetch;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub(crate) use store::CacheStore;
pub use store::ResponseCache;
