//! Cost Model
//!
//! Lets a value report its memory footprint for capacity accounting.

use std::sync::Arc;

/// Cost charged for values that opt in without reporting a footprint.
pub const DEFAULT_CACHE_COST: u64 = 1;

/// A value whose cost counts against a backend's total cost limit.
///
/// The cost must not change while the value is stored: backends record it
/// once at store time and keep the aggregate incrementally. Types that have
/// no meaningful footprint implement the trait with an empty body and are
/// charged [`DEFAULT_CACHE_COST`].
pub trait CacheCostCalculable {
    fn cache_cost(&self) -> u64 {
        DEFAULT_CACHE_COST
    }
}

impl CacheCostCalculable for Vec<u8> {
    fn cache_cost(&self) -> u64 {
        self.len() as u64
    }
}

impl CacheCostCalculable for Box<[u8]> {
    fn cache_cost(&self) -> u64 {
        self.len() as u64
    }
}

impl CacheCostCalculable for String {
    fn cache_cost(&self) -> u64 {
        self.len() as u64
    }
}

impl<T: CacheCostCalculable + ?Sized> CacheCostCalculable for Arc<T> {
    fn cache_cost(&self) -> u64 {
        (**self).cache_cost()
    }
}
