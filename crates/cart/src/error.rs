//! Cart persistence errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised while writing the cart to durable storage.
///
/// The store itself never surfaces these from its mutating operations; they
/// are logged and swallowed there. [`crate::CartStore::try_persist`] returns
/// them for callers that want to know.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The line items could not be encoded.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    /// The storage backend rejected the write.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
