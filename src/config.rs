//! Configuration Module
//!
//! Limits and defaults for the in-memory storage backend.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::storage::StorageExpiration;

/// Memory storage configuration parameters.
///
/// A limit of 0 means the limit is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Maximum aggregate cost of all stored values
    pub total_cost_limit: u64,
    /// Maximum number of stored entries
    pub count_limit: usize,
    /// Expiration applied when a store call does not supply one
    pub expiration: StorageExpiration,
    /// Interval between background sweeps of expired entries
    pub clean_interval: Duration,
}

impl MemoryConfig {
    /// Creates a config with the given total cost limit and defaults for
    /// everything else.
    pub fn new(total_cost_limit: u64) -> Self {
        Self {
            total_cost_limit,
            ..Self::default()
        }
    }

    /// Creates a new MemoryConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `IMAGE_STORAGE_TOTAL_COST_LIMIT` - Total cost limit (default: 0, unlimited)
    /// - `IMAGE_STORAGE_COUNT_LIMIT` - Entry count limit (default: 0, unlimited)
    /// - `IMAGE_STORAGE_EXPIRATION_SECS` - Default expiration in seconds (default: 300)
    /// - `IMAGE_STORAGE_CLEAN_INTERVAL_SECS` - Sweep frequency in seconds (default: 120)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            total_cost_limit: parse_var("IMAGE_STORAGE_TOTAL_COST_LIMIT")
                .unwrap_or(defaults.total_cost_limit),
            count_limit: parse_var("IMAGE_STORAGE_COUNT_LIMIT").unwrap_or(defaults.count_limit),
            expiration: parse_var("IMAGE_STORAGE_EXPIRATION_SECS")
                .map(StorageExpiration::Seconds)
                .unwrap_or(defaults.expiration),
            clean_interval: parse_var("IMAGE_STORAGE_CLEAN_INTERVAL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.clean_interval),
        }
    }

    pub fn with_count_limit(mut self, count_limit: usize) -> Self {
        self.count_limit = count_limit;
        self
    }

    pub fn with_expiration(mut self, expiration: StorageExpiration) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_clean_interval(mut self, clean_interval: Duration) -> Self {
        self.clean_interval = clean_interval;
        self
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            total_cost_limit: 0,
            count_limit: 0,
            expiration: StorageExpiration::Seconds(300),
            clean_interval: Duration::from_secs(120),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
