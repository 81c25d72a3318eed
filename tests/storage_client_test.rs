use cereal_storage::clients::{ActorClient, StorageClient};
use cereal_storage::framework::mock::MockClient;
use cereal_storage::framework::FrameworkError;
use cereal_storage::model::{Cereal, StorageId};
use cereal_storage::storage::{CerealStorage, CerealStorageImpl, StorageError};
use cereal_storage::storage_actor::{StorageActionResult, StorageClientError};

/// Client logic against a scripted actor: no storage is ever created, the mock
/// answers each request in order.
#[tokio::test]
async fn test_storage_client_with_mocked_actor() {
    let mut mock = MockClient::<CerealStorageImpl>::new();
    let id = StorageId(7);

    mock.expect_action(id)
        .return_ok(StorageActionResult::AddCereal(0.0));
    mock.expect_action(id)
        .return_ok(StorageActionResult::GetSpace(6.0));
    mock.expect_action(id)
        .return_err(FrameworkError::EntityError(Box::new(StorageError::NotFound(
            Cereal::Millet,
        ))));
    mock.expect_action(id)
        .return_ok(StorageActionResult::Describe("Rice: 4".to_string()));

    let client = StorageClient::new(mock.client());

    assert_eq!(client.add_cereal(id, Cereal::Rice, 4.0).await.unwrap(), 0.0);
    assert_eq!(client.get_space(id, Cereal::Rice).await.unwrap(), 6.0);
    assert_eq!(
        client.get_space(id, Cereal::Millet).await,
        Err(StorageClientError::Storage(StorageError::NotFound(Cereal::Millet)))
    );
    assert_eq!(client.describe(id).await.unwrap(), "Rice: 4");

    mock.verify();
}

#[tokio::test]
async fn test_snapshot_and_delete_with_mocked_actor() {
    let mut mock = MockClient::<CerealStorageImpl>::new();
    let id = StorageId(1);

    let mut storage = CerealStorageImpl::new(10.0, 20.0).unwrap();
    storage.add_cereal(Cereal::Buckwheat, 3.0).unwrap();

    mock.expect_create().return_ok(id);
    mock.expect_get(id).return_ok(Some(storage.clone()));
    mock.expect_delete(id).return_ok();
    mock.expect_get(id).return_ok(None);

    let client = StorageClient::new(mock.client());

    let created = client
        .create_storage(cereal_storage::model::StorageConfig::new(10.0, 20.0))
        .await
        .unwrap();
    assert_eq!(created, id);

    let snapshot = client.get(id).await.unwrap().expect("Storage not found");
    assert_eq!(snapshot, storage);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    mock.verify();
}

#[tokio::test]
async fn test_missing_storage_is_reported() {
    let mut mock = MockClient::<CerealStorageImpl>::new();
    let id = StorageId(3);
    mock.expect_action(id)
        .return_err(FrameworkError::NotFound(id.to_string()));

    let client = StorageClient::new(mock.client());
    let result = client.remove_container(id, Cereal::Peas).await;
    assert_eq!(
        result,
        Err(StorageClientError::StorageNotFound("storage_3".to_string()))
    );

    mock.verify();
}
