//! Storage Statistics Module
//!
//! Tracks hits, misses, evictions and expirations of a memory storage.

use serde::Serialize;

// == Cache Stats ==
/// Memory storage counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Fetches that returned a live value
    pub hits: u64,
    /// Fetches that found nothing live
    pub misses: u64,
    /// Entries dropped to satisfy count or cost limits
    pub evictions: u64,
    /// Expired entries physically removed
    pub expirations: u64,
    /// Current number of stored entries, live or not
    pub total_entries: usize,
    /// Aggregate cost of stored entries
    pub total_cost: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was fetched.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_evictions_and_expirations() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_expirations(3);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expirations, 3);
    }

    #[test]
    fn test_stats_serialize() {
        let json = serde_json::to_value(CacheStats::new()).unwrap();
        assert_eq!(json["hits"], 0);
        assert_eq!(json["total_cost"], 0);
    }
}
