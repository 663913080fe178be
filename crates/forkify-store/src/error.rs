//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError { code: STORAGE_ERROR } (apps/cli)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed blob on restore is NOT an error: it is logged and treated as
//! an empty bookmark set.

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing store failed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full
    /// - Rename of the temp file failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The bookmark set could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key is empty or would escape the data directory.
    #[error("Invalid storage key: '{key}'")]
    InvalidKey { key: String },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
