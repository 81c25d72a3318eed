//! # Cereal Storage Demo
//!
//! Walks one shared storage through its whole lifecycle:
//! 1. Starting the [`StorageSystem`].
//! 2. Filling containers until every slot is taken.
//! 3. Emptying and removing a container to make room for another cereal.
//!
//! Capacities come from `CEREAL_CONTAINER_CAPACITY` / `CEREAL_STORAGE_CAPACITY`.

use cereal_storage::lifecycle::{setup_tracing, StorageSystem};
use cereal_storage::model::{Cereal, StorageConfig};
use cereal_storage::storage::StorageError;
use cereal_storage::storage_actor::StorageClientError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorageConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storage system");

    let system = StorageSystem::new();
    let client = &system.storage_client;

    let id = client
        .create_storage(config)
        .await
        .map_err(|e| e.to_string())?;
    info!(storage_id = %id, "Storage created");

    let span = tracing::info_span!("filling");
    async {
        for (cereal, amount) in [(Cereal::Rice, 6.0), (Cereal::Rice, 5.0), (Cereal::Peas, 4.0)] {
            let leftover = client
                .add_cereal(id, cereal, amount)
                .await
                .map_err(|e| e.to_string())?;
            info!(%cereal, amount, leftover, "Added cereal");
        }

        match client.add_cereal(id, Cereal::Bulgur, 1.0).await {
            Err(StorageClientError::Storage(StorageError::CapacityExceeded { max_containers })) => {
                warn!(max_containers, "No free slot for Bulgur")
            }
            Ok(leftover) => info!(leftover, "Added Bulgur"),
            Err(e) => return Err(e.to_string()),
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("making_room");
    async {
        let taken = client
            .get_cereal(id, Cereal::Rice, 10.0)
            .await
            .map_err(|e| e.to_string())?;
        info!(taken, "Emptied Rice");

        let removed = client
            .remove_container(id, Cereal::Rice)
            .await
            .map_err(|e| e.to_string())?;
        info!(removed, "Removed Rice container");

        let leftover = client
            .add_cereal(id, Cereal::Bulgur, 1.0)
            .await
            .map_err(|e| e.to_string())?;
        info!(leftover, "Added Bulgur");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let listing = client.describe(id).await.map_err(|e| e.to_string())?;
    info!(%listing, "Final contents");

    for cereal in Cereal::ALL {
        let amount = client
            .get_amount(id, cereal)
            .await
            .map_err(|e| e.to_string())?;
        match client.get_space(id, cereal).await {
            Ok(space) => info!(%cereal, amount, space, "Container"),
            Err(StorageClientError::Storage(StorageError::NotFound(_))) => {
                info!(%cereal, "No container")
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
