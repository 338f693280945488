//! Error types for the storage layer
//!
//! Provides unified error handling using thiserror.

use std::string::FromUtf8Error;

use thiserror::Error;

// == Serialization Error Enum ==
/// Failure converting a value to or from its byte representation.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Bytes are not valid UTF-8 text
    #[error("Invalid UTF-8 data: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// JSON encoding or decoding failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Bytes do not follow the layout the value type expects
    #[error("Malformed data: {0}")]
    Malformed(String),
}

// == Storage Error Enum ==
/// Unified error type for storage backends.
///
/// A missing or expired key is never reported through this type.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A single value costs more than the backend may hold in total
    #[error("Value for key {key} costs {cost}, above the total cost limit of {limit}")]
    CostLimitExceeded { key: String, cost: u64, limit: u64 },

    /// Value could not be encoded for storage or decoded on fetch
    #[error("Serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    /// Underlying I/O or resource failure (disk full, permission denied)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_wraps_into_storage_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: StorageError = SerializationError::from(utf8_err).into();

        assert!(matches!(
            err,
            StorageError::Serialization(SerializationError::InvalidUtf8(_))
        ));
        assert!(err.to_string().starts_with("Serialization failed"));
    }

    fn write_blob(fail_with: Option<std::io::ErrorKind>) -> Result<()> {
        let written: std::io::Result<()> = match fail_with {
            Some(kind) => Err(std::io::Error::new(kind, "write refused")),
            None => Ok(()),
        };
        written?;
        Ok(())
    }

    #[test]
    fn test_io_error_propagates_as_storage_error() {
        assert!(write_blob(None).is_ok());

        let err = write_blob(Some(std::io::ErrorKind::PermissionDenied)).unwrap_err();
        match err {
            StorageError::Io(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_cost_limit_message() {
        let err = StorageError::CostLimitExceeded {
            key: "avatar".to_string(),
            cost: 20,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Value for key avatar costs 20, above the total cost limit of 10"
        );
    }
}
