//! LRU Tracker Module
//!
//! Recency order of stored keys, used to pick eviction victims.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for least-recently-used eviction.
///
/// Front holds the most recently used key, back the least recently used.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, adding it if unknown.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Removes and returns the least recently used key other than `keep`.
    ///
    /// Returns None when no such key exists.
    pub fn pop_oldest_except(&mut self, keep: &str) -> Option<String> {
        let index = self.order.iter().rposition(|k| k != keep)?;
        self.order.remove(index)
    }

    /// Least recently used key, if any.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_orders_by_recency() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        assert_eq!(lru.peek_oldest(), Some("a"));

        lru.touch("a");
        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("b"));
    }

    #[test]
    fn test_pop_oldest_skips_kept_key() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");

        // "a" is oldest but protected
        assert_eq!(lru.pop_oldest_except("a"), Some("b".to_string()));
        assert_eq!(lru.pop_oldest_except("a"), None);
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_pop_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("a");
        lru.touch("c");
        lru.touch("b");

        // front=[b, c, a]=back
        assert_eq!(lru.pop_oldest_except(""), Some("a".to_string()));
        assert_eq!(lru.pop_oldest_except(""), Some("c".to_string()));
        assert_eq!(lru.pop_oldest_except(""), Some("b".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.remove("missing");
        assert_eq!(lru.len(), 2);

        lru.remove("key1");
        assert_eq!(lru.peek_oldest(), Some("key2"));

        lru.clear();
        assert!(lru.is_empty());
    }
}
