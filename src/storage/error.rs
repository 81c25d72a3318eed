//! Error types for storage operations.

use crate::model::Cereal;
use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// A failing call never leaves a storage partially modified.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    /// A negative amount, or an inconsistent capacity pair at construction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Every container slot is taken, so no container can be opened for a new kind.
    #[error("No room for another container: all {max_containers} slots are in use")]
    CapacityExceeded { max_containers: usize },

    /// The cereal has no container in this storage.
    #[error("Container not found: {0}")]
    NotFound(Cereal),
}
