//! # Storage Actor
//!
//! Runs storages inside a [`ResourceActor`], so any number of tasks can share them
//! through cloned clients while every operation is applied one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CerealStorageImpl`]
//! - [`error`] - [`StorageClientError`], which keeps [`StorageError`](crate::storage::StorageError) typed across the actor boundary
//! - [`actions`] - [`StorageAction`] and [`StorageActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cereal_storage::clients::StorageClient;
//! use cereal_storage::model::{Cereal, StorageConfig};
//! use cereal_storage::storage_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = storage_actor::new();
//!     let client = StorageClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_storage(StorageConfig::new(10.0, 22.0)).await?;
//!     let leftover = client.add_cereal(id, Cereal::Rice, 12.0).await?;
//!     assert_eq!(leftover, 2.0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::storage::CerealStorageImpl;

/// Capacity of the storage actor's request channel.
pub const STORAGE_ACTOR_BUFFER: usize = 32;

/// Creates a new storage actor and its client.
pub fn new() -> (ResourceActor<CerealStorageImpl>, ResourceClient<CerealStorageImpl>) {
    ResourceActor::new(STORAGE_ACTOR_BUFFER)
}
