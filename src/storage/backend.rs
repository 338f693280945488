//! Storage Backend Contract
//!
//! The operation set every concrete cache backend implements.

use crate::error::Result;
use crate::storage::StorageExpiration;

/// A key/value store with per-entry expiration.
///
/// Absence and expiry are reported as `Ok(None)` / `false`, never as errors.
/// An entry is expired once the current instant is at or after its expiry.
pub trait StorageBackend {
    /// Key type entries are stored under
    type Key;
    /// Value type returned from fetches
    type Value;

    /// Stores `value` under `key`, replacing both value and expiry of any
    /// existing entry.
    ///
    /// When `expiration` is `None` the backend applies its configured
    /// default. The new value is visible to the next [`Self::value`] call.
    fn store(
        &mut self,
        value: Self::Value,
        key: Self::Key,
        expiration: Option<StorageExpiration>,
    ) -> Result<()>;

    /// Returns the live value stored under `key`, if any.
    fn value(&mut self, key: &Self::Key) -> Result<Option<Self::Value>>;

    /// Removes the entry under `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &Self::Key) -> Result<()>;

    /// Removes every entry, expired or not.
    fn remove_all(&mut self) -> Result<()>;

    /// Reports whether a live entry exists under `key` without decoding it.
    fn is_cached(&self, key: &Self::Key) -> bool;
}
