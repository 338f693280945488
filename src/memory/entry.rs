//! Storage Object Module
//!
//! A single stored value together with its expiration bookkeeping.

use chrono::{DateTime, Utc};

use crate::storage::{is_expired, ExpirationExtending, StorageExpiration};

// == Storage Object ==
/// Represents a single memory storage entry with its expiry and cost.
#[derive(Debug, Clone)]
pub struct StorageObject<V> {
    /// The stored value
    pub value: V,
    /// Policy the expiry was computed from
    pub expiration: StorageExpiration,
    /// Instant at which the entry stops being visible
    pub estimated_expiration: DateTime<Utc>,
    /// Cost recorded when the value was stored
    pub cost: u64,
}

impl<V> StorageObject<V> {
    // == Constructor ==
    /// Creates a new entry stored at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `expiration` - Policy used to compute the expiry
    /// * `cost` - Cost charged against the storage's total cost limit
    /// * `now` - Store instant
    pub fn new(value: V, expiration: StorageExpiration, cost: u64, now: DateTime<Utc>) -> Self {
        Self {
            value,
            expiration,
            estimated_expiration: expiration.estimated_expiration_since(now),
            cost,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry whose expiry equals `now` is expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        is_expired(self.estimated_expiration, now)
    }

    // == Extend Expiration ==
    /// Pushes the expiry back according to `extending`, measured from `now`.
    pub fn extend_expiration(&mut self, extending: ExpirationExtending, now: DateTime<Utc>) {
        match extending {
            ExpirationExtending::None => {}
            ExpirationExtending::CacheTime => {
                self.estimated_expiration = self.expiration.estimated_expiration_since(now);
            }
            ExpirationExtending::ExpirationTime(expiration) => {
                self.expiration = expiration;
                self.estimated_expiration = expiration.estimated_expiration_since(now);
            }
        }
    }
}
