//! # Store Error Types
//!
//! Error types for key-value storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path and categorization               │
//! │       │                                                                 │
//! │       ├──► CartManager mutation: logged, cart stays in memory          │
//! │       │                                                                 │
//! │       └──► CartManager::flush / FileStore::open: returned to caller    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use storefront_core::CoreError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file exists but is not a valid store document.
    #[error("Corrupt store file {}: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// Domain error (e.g., an invalid catalog document).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = StoreError::io(
            "/tmp/cart.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/cart.json: denied");

        let err = StoreError::CorruptStore {
            path: PathBuf::from("/tmp/cart.json"),
            reason: "expected object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt store file /tmp/cart.json: expected object"
        );
    }

    #[test]
    fn test_core_error_converts() {
        let err: StoreError = CoreError::ItemNotFound(4).into();
        assert!(matches!(err, StoreError::Core(_)));
        assert_eq!(err.to_string(), "Catalog item not found: 4");
    }
}
