//! Storage Module
//!
//! Contracts shared by every cache backend: expiration policy, the backend
//! operation set, and the optional cost and serialization capabilities.

mod backend;
mod clock;
mod cost;
mod encoded;
mod expiration;
mod transform;

// Re-export public types
pub use backend::StorageBackend;
pub use clock::{Clock, ManualClock, SystemClock};
pub use cost::{CacheCostCalculable, DEFAULT_CACHE_COST};
pub use encoded::EncodedStorage;
pub use expiration::{is_expired, ExpirationExtending, StorageExpiration, SECONDS_PER_DAY};
pub use transform::{DataTransformable, Json};
