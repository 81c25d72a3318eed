//! # Storage Client
//!
//! High-level API for storages owned by the storage actor. It wraps a
//! `ResourceClient<CerealStorageImpl>` and mirrors the
//! [`CerealStorage`](crate::storage::CerealStorage) operations as async calls.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cereal, StorageConfig, StorageId};
use crate::storage::CerealStorageImpl;
use crate::storage_actor::{StorageAction, StorageActionResult, StorageClientError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the storage actor.
#[derive(Clone)]
pub struct StorageClient {
    inner: ResourceClient<CerealStorageImpl>,
}

impl StorageClient {
    pub fn new(inner: ResourceClient<CerealStorageImpl>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CerealStorageImpl> for StorageClient {
    type Error = StorageClientError;

    fn inner(&self) -> &ResourceClient<CerealStorageImpl> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StorageClientError::from(e)
    }
}

impl StorageClient {
    /// Creates a storage with the given capacities and returns its ID.
    ///
    /// An invalid capacity pair fails with
    /// [`StorageError::InvalidArgument`](crate::storage::StorageError::InvalidArgument).
    #[instrument(skip(self))]
    pub async fn create_storage(
        &self,
        config: StorageConfig,
    ) -> Result<StorageId, StorageClientError> {
        debug!("Sending request");
        Ok(self.inner.create(config).await?)
    }

    /// Returns the leftover that did not fit into the container.
    #[instrument(skip(self))]
    pub async fn add_cereal(
        &self,
        id: StorageId,
        cereal: Cereal,
        amount: f32,
    ) -> Result<f32, StorageClientError> {
        self.perform(id, StorageAction::AddCereal { cereal, amount }, |result| match result {
            StorageActionResult::AddCereal(leftover) => Ok(leftover),
            other => Err(other),
        })
        .await
    }

    /// Returns the amount actually taken.
    #[instrument(skip(self))]
    pub async fn get_cereal(
        &self,
        id: StorageId,
        cereal: Cereal,
        amount: f32,
    ) -> Result<f32, StorageClientError> {
        self.perform(id, StorageAction::GetCereal { cereal, amount }, |result| match result {
            StorageActionResult::GetCereal(taken) => Ok(taken),
            other => Err(other),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_container(
        &self,
        id: StorageId,
        cereal: Cereal,
    ) -> Result<bool, StorageClientError> {
        self.perform(id, StorageAction::RemoveContainer(cereal), |result| match result {
            StorageActionResult::RemoveContainer(removed) => Ok(removed),
            other => Err(other),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_amount(
        &self,
        id: StorageId,
        cereal: Cereal,
    ) -> Result<f32, StorageClientError> {
        self.perform(id, StorageAction::GetAmount(cereal), |result| match result {
            StorageActionResult::GetAmount(amount) => Ok(amount),
            other => Err(other),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_space(
        &self,
        id: StorageId,
        cereal: Cereal,
    ) -> Result<f32, StorageClientError> {
        self.perform(id, StorageAction::GetSpace(cereal), |result| match result {
            StorageActionResult::GetSpace(space) => Ok(space),
            other => Err(other),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn describe(&self, id: StorageId) -> Result<String, StorageClientError> {
        self.perform(id, StorageAction::Describe, |result| match result {
            StorageActionResult::Describe(listing) => Ok(listing),
            other => Err(other),
        })
        .await
    }

    /// Sends `action` and pulls the matching variant out of the result.
    async fn perform<R>(
        &self,
        id: StorageId,
        action: StorageAction,
        extract: impl FnOnce(StorageActionResult) -> Result<R, StorageActionResult>,
    ) -> Result<R, StorageClientError> {
        debug!(?action, "Sending request");
        let result = self.inner.perform_action(id, action).await?;
        extract(result).map_err(|other| {
            StorageClientError::ActorCommunicationError(format!(
                "unexpected action result {other:?}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create};
    use crate::storage::StorageError;

    #[tokio::test]
    async fn test_create_storage_sends_config() {
        let (client, mut receiver) = create_mock_client::<CerealStorageImpl>(10);
        let storage_client = StorageClient::new(client);

        let create_task = tokio::spawn(async move {
            storage_client
                .create_storage(StorageConfig::new(10.0, 22.0))
                .await
        });

        let (config, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(config, StorageConfig::new(10.0, 22.0));
        responder.send(Ok(StorageId(1))).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), StorageId(1));
    }

    #[tokio::test]
    async fn test_add_cereal_returns_leftover() {
        let (client, mut receiver) = create_mock_client::<CerealStorageImpl>(10);
        let storage_client = StorageClient::new(client);

        let add_task = tokio::spawn(async move {
            storage_client
                .add_cereal(StorageId(1), Cereal::Rice, 5.0)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, StorageId(1));
        assert_eq!(
            action,
            StorageAction::AddCereal {
                cereal: Cereal::Rice,
                amount: 5.0
            }
        );
        responder.send(Ok(StorageActionResult::AddCereal(1.0))).unwrap();

        assert_eq!(add_task.await.unwrap().unwrap(), 1.0);
    }

    #[tokio::test]
    async fn test_add_cereal_surfaces_capacity_exceeded() {
        let (client, mut receiver) = create_mock_client::<CerealStorageImpl>(10);
        let storage_client = StorageClient::new(client);

        let add_task = tokio::spawn(async move {
            storage_client
                .add_cereal(StorageId(1), Cereal::Bulgur, 1.0)
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                StorageError::CapacityExceeded { max_containers: 2 },
            ))))
            .unwrap();

        assert_eq!(
            add_task.await.unwrap(),
            Err(StorageClientError::Storage(StorageError::CapacityExceeded {
                max_containers: 2
            }))
        );
    }

    #[tokio::test]
    async fn test_mismatched_result_is_reported() {
        let (client, mut receiver) = create_mock_client::<CerealStorageImpl>(10);
        let storage_client = StorageClient::new(client);

        let amount_task = tokio::spawn(async move {
            storage_client.get_amount(StorageId(1), Cereal::Peas).await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Ok(StorageActionResult::RemoveContainer(true)))
            .unwrap();

        assert!(matches!(
            amount_task.await.unwrap(),
            Err(StorageClientError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<CerealStorageImpl>(10);
        drop(receiver);
        let storage_client = StorageClient::new(client);

        let result = storage_client.describe(StorageId(1)).await;
        assert_eq!(
            result,
            Err(StorageClientError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
