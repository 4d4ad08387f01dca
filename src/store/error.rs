//! Error types for store operations.

use thiserror::Error;

/// Errors signaled by [`StudentStore`](super::StudentStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier is absent, or the record is tombstoned.
    #[error("student not found: {id}")]
    NotFound { id: String },
}
