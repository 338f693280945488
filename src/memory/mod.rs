//! Memory Module
//!
//! In-memory storage backend with expiration, LRU eviction and cost limits.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::StorageObject;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::MemoryStorage;
