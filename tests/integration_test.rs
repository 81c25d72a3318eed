use cereal_storage::clients::ActorClient;
use cereal_storage::lifecycle::StorageSystem;
use cereal_storage::model::{Cereal, StorageConfig, StorageId};
use cereal_storage::storage::{CerealStorage, StorageError};
use cereal_storage::storage_actor::StorageClientError;

/// Full end-to-end test against the real storage actor.
/// Two slots (10 per container, 22 in total): fill them, get refused, make room.
#[tokio::test]
async fn test_two_slot_storage_through_actor() {
    let system = StorageSystem::new();
    let client = system.storage_client.clone();

    let id = client
        .create_storage(StorageConfig::new(10.0, 22.0))
        .await
        .expect("Failed to create storage");

    assert_eq!(client.add_cereal(id, Cereal::Rice, 6.0).await.unwrap(), 0.0);
    assert_eq!(client.get_amount(id, Cereal::Rice).await.unwrap(), 6.0);
    assert_eq!(client.add_cereal(id, Cereal::Rice, 5.0).await.unwrap(), 1.0);
    assert_eq!(client.get_amount(id, Cereal::Rice).await.unwrap(), 10.0);
    assert_eq!(client.add_cereal(id, Cereal::Peas, 4.0).await.unwrap(), 0.0);

    let refused = client.add_cereal(id, Cereal::Bulgur, 1.0).await;
    assert_eq!(
        refused,
        Err(StorageClientError::Storage(StorageError::CapacityExceeded {
            max_containers: 2
        }))
    );

    assert!(!client.remove_container(id, Cereal::Rice).await.unwrap());
    assert_eq!(client.get_cereal(id, Cereal::Rice, 10.0).await.unwrap(), 10.0);
    assert_eq!(client.get_amount(id, Cereal::Rice).await.unwrap(), 0.0);
    assert!(client.remove_container(id, Cereal::Rice).await.unwrap());

    let space = client.get_space(id, Cereal::Rice).await;
    assert_eq!(
        space,
        Err(StorageClientError::Storage(StorageError::NotFound(Cereal::Rice)))
    );

    assert_eq!(client.add_cereal(id, Cereal::Bulgur, 1.0).await.unwrap(), 0.0);
    assert_eq!(client.describe(id).await.unwrap(), "Bulgur: 1, Peas: 4");

    // Snapshot matches what the actor reports
    let snapshot = client
        .get(id)
        .await
        .expect("Failed to get storage")
        .expect("Storage not found");
    assert_eq!(snapshot.get_amount(Cereal::Peas), 4.0);
    assert_eq!(snapshot.get_space(Cereal::Bulgur), Ok(9.0));

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let system = StorageSystem::new();

    let result = system
        .storage_client
        .create_storage(StorageConfig::new(-1.0, 10.0))
        .await;
    assert!(matches!(
        result,
        Err(StorageClientError::Storage(StorageError::InvalidArgument(_)))
    ));

    let result = system
        .storage_client
        .create_storage(StorageConfig::new(10.0, 5.0))
        .await;
    assert!(matches!(
        result,
        Err(StorageClientError::Storage(StorageError::InvalidArgument(_)))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_storages_are_isolated_and_deletable() {
    let system = StorageSystem::new();
    let client = &system.storage_client;

    let first = client.create_storage(StorageConfig::new(5.0, 5.0)).await.unwrap();
    let second = client.create_storage(StorageConfig::new(5.0, 15.0)).await.unwrap();
    assert_ne!(first, second);

    client.add_cereal(first, Cereal::Millet, 2.0).await.unwrap();
    assert_eq!(client.get_amount(second, Cereal::Millet).await.unwrap(), 0.0);
    assert!(matches!(
        client.add_cereal(first, Cereal::Rice, 1.0).await,
        Err(StorageClientError::Storage(StorageError::CapacityExceeded { .. }))
    ));
    assert_eq!(client.add_cereal(second, Cereal::Rice, 1.0).await.unwrap(), 0.0);

    client.delete(first).await.unwrap();
    assert!(client.get(first).await.unwrap().is_none());
    assert_eq!(
        client.get_amount(first, Cereal::Millet).await,
        Err(StorageClientError::StorageNotFound(first.to_string()))
    );

    let missing = StorageId(99);
    assert_eq!(
        client.delete(missing).await,
        Err(StorageClientError::StorageNotFound("storage_99".to_string()))
    );

    system.shutdown().await.unwrap();
}

/// Many tasks hammering one storage: the actor applies requests one at a time,
/// so the container never overflows and no cereal is lost.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_conserve_mass() {
    let system = StorageSystem::new();
    let id = system
        .storage_client
        .create_storage(StorageConfig::new(100.0, 100.0))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let client = system.storage_client.clone();
        handles.push(tokio::spawn(async move {
            client.add_cereal(id, Cereal::Rice, 3.0).await.unwrap()
        }));
    }

    let mut leftover = 0.0;
    for handle in handles {
        leftover += handle.await.unwrap();
    }

    let stored = system.storage_client.get_amount(id, Cereal::Rice).await.unwrap();
    assert_eq!(stored, 100.0);
    assert_eq!(stored + leftover, 150.0);

    system.shutdown().await.unwrap();
}
