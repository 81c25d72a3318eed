//! # ActorClient Trait
//!
//! Whole-storage access shared by every typed client: fetching a snapshot of a
//! storage and deleting it. Per-cereal operations live on
//! [`StorageClient`](crate::clients::StorageClient).
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Snapshot and delete for entities owned by a [`ResourceActor`](crate::framework::ResourceActor).
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Error surfaced to callers, e.g. [`StorageClientError`](crate::storage_actor::StorageClientError).
    type Error: From<String> + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Turns a framework failure into [`Self::Error`], keeping entity errors typed.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Returns a copy of the entity as the actor holds it, or `None` once deleted.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Fetching snapshot");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Drops the entity. An unknown ID fails with the client's not-found error.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Deleting");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
