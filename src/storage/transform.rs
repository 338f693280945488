//! Serialization Contract
//!
//! Lets a value be persisted as raw bytes and reconstructed later.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SerializationError;

/// A value that converts to and from a byte representation.
///
/// `from_data(&v.to_data()?)` must be equal to `v`.
pub trait DataTransformable: Sized {
    /// Encodes the value.
    fn to_data(&self) -> Result<Vec<u8>, SerializationError>;

    /// Decodes bytes produced by [`Self::to_data`].
    fn from_data(data: &[u8]) -> Result<Self, SerializationError>;

    /// Canonical placeholder instance, produced without decoding anything.
    fn empty() -> Self;
}

impl DataTransformable for Vec<u8> {
    fn to_data(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(self.clone())
    }

    fn from_data(data: &[u8]) -> Result<Self, SerializationError> {
        Ok(data.to_vec())
    }

    fn empty() -> Self {
        Vec::new()
    }
}

impl DataTransformable for String {
    fn to_data(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(self.as_bytes().to_vec())
    }

    fn from_data(data: &[u8]) -> Result<Self, SerializationError> {
        Ok(String::from_utf8(data.to_vec())?)
    }

    fn empty() -> Self {
        String::new()
    }
}

// == JSON Wrapper ==
/// Stores any serde type as JSON bytes.
///
/// The empty instance wraps `T::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Json<T>(pub T);

impl<T> DataTransformable for Json<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn to_data(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec(&self.0)?)
    }

    fn from_data(data: &[u8]) -> Result<Self, SerializationError> {
        Ok(Json(serde_json::from_slice(data)?))
    }

    fn empty() -> Self {
        Json(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct ImageMeta {
        width: u32,
        height: u32,
        format: String,
    }

    #[test]
    fn test_string_rejects_invalid_utf8() {
        let result = String::from_data(&[0xc3, 0x28]);
        assert!(matches!(result, Err(SerializationError::InvalidUtf8(_))));
    }

    #[test]
    fn test_json_rejects_malformed_input() {
        let result = Json::<ImageMeta>::from_data(b"{\"width\": ");
        assert!(matches!(result, Err(SerializationError::Json(_))));
    }

    #[test]
    fn test_empty_instances() {
        assert!(Vec::<u8>::empty().is_empty());
        assert!(String::empty().is_empty());
        assert_eq!(Json::<ImageMeta>::empty(), Json(ImageMeta::default()));
    }

    #[test]
    fn test_json_wrapper_round_trip() {
        let meta = Json(ImageMeta {
            width: 640,
            height: 480,
            format: "png".to_string(),
        });
        let data = meta.to_data().unwrap();
        assert_eq!(Json::<ImageMeta>::from_data(&data).unwrap(), meta);
    }

    proptest! {
        #[test]
        fn prop_bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
            let decoded = Vec::<u8>::from_data(&bytes.to_data().unwrap()).unwrap();
            prop_assert_eq!(decoded, bytes);
        }

        #[test]
        fn prop_string_round_trip(text in ".{0,128}") {
            let decoded = String::from_data(&text.to_data().unwrap()).unwrap();
            prop_assert_eq!(decoded, text);
        }
    }
}
