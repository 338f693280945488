//! Encoded Storage
//!
//! Presents a byte-valued backend as a backend of any serializable value.

use std::marker::PhantomData;

use crate::error::Result;
use crate::storage::{DataTransformable, StorageBackend, StorageExpiration};

// == Encoded Storage ==
/// Adapter that encodes values with [`DataTransformable`] before handing
/// them to a backend storing raw bytes.
///
/// Encoding and decoding failures surface as
/// [`StorageError::Serialization`](crate::error::StorageError::Serialization).
pub struct EncodedStorage<B, V> {
    backend: B,
    _value: PhantomData<fn() -> V>,
}

impl<B, V> EncodedStorage<B, V> {
    /// Wraps `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            _value: PhantomData,
        }
    }

    /// Returns the wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B, V> EncodedStorage<B, V>
where
    B: StorageBackend<Value = Vec<u8>>,
    V: DataTransformable,
{
    // == Value Or Empty ==
    /// Returns the decoded value under `key`, or `V::empty()` when nothing
    /// live is stored there.
    pub fn value_or_empty(&mut self, key: &B::Key) -> Result<V> {
        Ok(self.value(key)?.unwrap_or_else(V::empty))
    }
}

impl<B, V> StorageBackend for EncodedStorage<B, V>
where
    B: StorageBackend<Value = Vec<u8>>,
    V: DataTransformable,
{
    type Key = B::Key;
    type Value = V;

    fn store(
        &mut self,
        value: V,
        key: B::Key,
        expiration: Option<StorageExpiration>,
    ) -> Result<()> {
        let data = value.to_data()?;
        self.backend.store(data, key, expiration)
    }

    fn value(&mut self, key: &B::Key) -> Result<Option<V>> {
        match self.backend.value(key)? {
            Some(data) => Ok(Some(V::from_data(&data)?)),
            None => Ok(None),
        }
    }

    fn remove(&mut self, key: &B::Key) -> Result<()> {
        self.backend.remove(key)
    }

    fn remove_all(&mut self) -> Result<()> {
        self.backend.remove_all()
    }

    fn is_cached(&self, key: &B::Key) -> bool {
        self.backend.is_cached(key)
    }
}
