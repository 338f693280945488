//! Image Storage - storage layer for image caches
//!
//! Expiration policies, the key/value backend contract, optional cost and
//! serialization capabilities, and an in-memory backend with LRU eviction
//! bounded by entry count and total cost.

pub mod config;
pub mod error;
pub mod memory;
pub mod storage;
pub mod tasks;

pub use config::MemoryConfig;
pub use error::{Result, SerializationError, StorageError};
pub use memory::MemoryStorage;
pub use storage::{
    CacheCostCalculable, DataTransformable, ExpirationExtending, StorageBackend,
    StorageExpiration,
};
pub use tasks::spawn_cleanup_task;
