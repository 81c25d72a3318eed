//! Error types for the storage client.

use crate::framework::FrameworkError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors returned by [`StorageClient`](crate::clients::StorageClient).
///
/// Storage failures cross the actor boundary boxed inside
/// [`FrameworkError::EntityError`]; they are unboxed back into
/// [`StorageClientError::Storage`] so callers can match on the typed error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageClientError {
    /// The storage rejected the operation.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// No storage exists with the given ID.
    #[error("Storage not found: {0}")]
    StorageNotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StorageClientError {
    fn from(msg: String) -> Self {
        StorageClientError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for StorageClientError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => StorageClientError::StorageNotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<StorageError>() {
                Ok(storage_error) => StorageClientError::Storage(*storage_error),
                Err(other) => StorageClientError::ActorCommunicationError(other.to_string()),
            },
            other => StorageClientError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cereal;

    #[test]
    fn test_entity_error_is_unboxed() {
        let e = FrameworkError::EntityError(Box::new(StorageError::NotFound(Cereal::Rice)));
        assert_eq!(
            StorageClientError::from(e),
            StorageClientError::Storage(StorageError::NotFound(Cereal::Rice))
        );
    }

    #[test]
    fn test_foreign_entity_error_becomes_communication_error() {
        let e = FrameworkError::EntityError(Box::new(std::io::Error::other("disk on fire")));
        assert_eq!(
            StorageClientError::from(e),
            StorageClientError::ActorCommunicationError("disk on fire".to_string())
        );
    }

    #[test]
    fn test_not_found_and_closed() {
        assert_eq!(
            StorageClientError::from(FrameworkError::NotFound("storage_9".to_string())),
            StorageClientError::StorageNotFound("storage_9".to_string())
        );
        assert_eq!(
            StorageClientError::from(FrameworkError::ActorClosed),
            StorageClientError::ActorCommunicationError("Actor closed".to_string())
        );
    }
}
