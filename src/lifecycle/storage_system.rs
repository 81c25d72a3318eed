use crate::clients::StorageClient;
use crate::storage_actor;
use tracing::{error, info};

/// Runtime orchestrator for shared storages.
///
/// `StorageSystem` starts the storage actor, hands out its [`StorageClient`] and
/// shuts the actor down again.
///
/// # Example
///
/// ```rust
/// use cereal_storage::lifecycle::StorageSystem;
/// use cereal_storage::model::{Cereal, StorageConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = StorageSystem::new();
///     let id = system
///         .storage_client
///         .create_storage(StorageConfig::new(10.0, 22.0))
///         .await
///         .map_err(|e| e.to_string())?;
///     system
///         .storage_client
///         .add_cereal(id, Cereal::Peas, 4.0)
///         .await
///         .map_err(|e| e.to_string())?;
///     system.shutdown().await
/// }
/// ```
pub struct StorageSystem {
    /// Client for interacting with the storage actor
    pub storage_client: StorageClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl StorageSystem {
    /// Spawns the storage actor. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (actor, generic_client) = storage_actor::new();
        let handle = tokio::spawn(actor.run(()));

        Self {
            storage_client: StorageClient::new(generic_client),
            handle,
        }
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the client closes the request channel; the actor drains what is
    /// queued, leaves its loop, and the task is awaited. Clones of the client held
    /// elsewhere keep the actor alive until they are dropped too.
    ///
    /// Returns `Err` if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storage system...");
        drop(self.storage_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Storage system shutdown complete.");
        Ok(())
    }
}

impl Default for StorageSystem {
    fn default() -> Self {
        Self::new()
    }
}
