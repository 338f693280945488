//! Memory Storage Module
//!
//! In-memory backend combining HashMap storage with LRU tracking, cost
//! accounting and expiration.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::MemoryConfig;
use crate::error::{Result, StorageError};
use crate::memory::{CacheStats, LruTracker, StorageObject};
use crate::storage::{
    is_expired, CacheCostCalculable, Clock, ExpirationExtending, StorageBackend,
    StorageExpiration, SystemClock,
};

// == Memory Storage ==
/// In-memory storage bounded by entry count and total value cost.
///
/// When a store pushes the storage over either limit, already-expired
/// entries are dropped first, then least recently used ones. The entry
/// just stored is never evicted by its own store call.
///
/// Methods take `&mut self`; share an instance across tasks through
/// `Arc<tokio::sync::RwLock<MemoryStorage<V>>>`.
#[derive(Debug)]
pub struct MemoryStorage<V> {
    /// Key-value storage
    entries: HashMap<String, StorageObject<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    config: MemoryConfig,
    /// Sum of the recorded costs of all entries; wide enough that adding
    /// any number of `u64` costs cannot overflow
    total_cost: u128,
    clock: Arc<dyn Clock>,
}

impl<V: CacheCostCalculable> MemoryStorage<V> {
    // == Constructor ==
    /// Creates an empty storage reading time from the system clock.
    pub fn new(config: MemoryConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty storage reading time from `clock`.
    pub fn with_clock(config: MemoryConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            config,
            total_cost: 0,
            clock,
        }
    }

    // == Value Extending ==
    /// Returns the live value under `key` and extends its expiry.
    ///
    /// An expired entry found here is removed and counted as a miss.
    pub fn value_extending(&mut self, key: &str, extending: ExpirationExtending) -> Option<V>
    where
        V: Clone,
    {
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            Some(object) => object.is_expired(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            debug!(key, "removed expired entry on fetch");
            return None;
        }

        let object = self.entries.get_mut(key)?;
        object.extend_expiration(extending, now);
        let value = object.value.clone();

        self.stats.record_hit();
        self.lru.touch(key);
        Some(value)
    }

    // == Remove Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self) -> usize {
        let now = self.clock.now();
        self.purge_expired(now)
    }

    // == Stats ==
    /// Returns current storage statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats.total_cost = self.total_cost();
        stats
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Aggregate cost of every stored entry, expired or not.
    ///
    /// Saturates at `u64::MAX`.
    pub fn total_cost(&self) -> u64 {
        u64::try_from(self.total_cost).unwrap_or(u64::MAX)
    }

    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(
        &mut self,
        value: V,
        key: String,
        expiration: Option<StorageExpiration>,
    ) -> Result<()> {
        let expiration = expiration.unwrap_or(self.config.expiration);
        let now = self.clock.now();

        // Nothing would ever see it; drop whatever the key held before.
        if is_expired(expiration.estimated_expiration_since(now), now) {
            self.remove_entry(&key);
            debug!(key = %key, "value already expired at store time, not stored");
            return Ok(());
        }

        let cost = value.cache_cost();
        let limit = self.config.total_cost_limit;
        if limit > 0 && cost > limit {
            return Err(StorageError::CostLimitExceeded { key, cost, limit });
        }

        let object = StorageObject::new(value, expiration, cost, now);
        if let Some(previous) = self.entries.insert(key.clone(), object) {
            self.total_cost -= u128::from(previous.cost);
        }
        self.total_cost += u128::from(cost);
        self.lru.touch(&key);

        self.evict_to_limits(&key, now);
        Ok(())
    }

    fn over_limits(&self) -> bool {
        let over_count = self.config.count_limit > 0 && self.entries.len() > self.config.count_limit;
        let over_cost = self.config.total_cost_limit > 0
            && self.total_cost > u128::from(self.config.total_cost_limit);
        over_count || over_cost
    }

    fn evict_to_limits(&mut self, keep: &str, now: DateTime<Utc>) {
        if !self.over_limits() {
            return;
        }

        self.purge_expired(now);

        while self.over_limits() {
            let Some(victim) = self.lru.pop_oldest_except(keep) else {
                break;
            };
            if let Some(object) = self.entries.remove(&victim) {
                self.total_cost -= u128::from(object.cost);
                self.stats.record_eviction();
                debug!(key = %victim, cost = object.cost, "evicted least recently used entry");
            }
        }
    }

    fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, object)| object.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            self.remove_entry(&key);
        }

        self.stats.record_expirations(count);
        count
    }

    fn remove_entry(&mut self, key: &str) -> Option<StorageObject<V>> {
        let object = self.entries.remove(key)?;
        self.lru.remove(key);
        self.total_cost -= u128::from(object.cost);
        Some(object)
    }
}

impl<V: Clone + CacheCostCalculable> StorageBackend for MemoryStorage<V> {
    type Key = String;
    type Value = V;

    fn store(
        &mut self,
        value: V,
        key: String,
        expiration: Option<StorageExpiration>,
    ) -> Result<()> {
        self.insert(value, key, expiration)
    }

    fn value(&mut self, key: &String) -> Result<Option<V>> {
        Ok(self.value_extending(key, ExpirationExtending::None))
    }

    fn remove(&mut self, key: &String) -> Result<()> {
        self.remove_entry(key);
        Ok(())
    }

    fn remove_all(&mut self) -> Result<()> {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.total_cost = 0;
        debug!(count, "removed all entries");
        Ok(())
    }

    fn is_cached(&self, key: &String) -> bool {
        let now = self.clock.now();
        self.entries
            .get(key.as_str())
            .is_some_and(|object| !object.is_expired(now))
    }
}
