//! # Cereal Storage
//!
//! > **A bounded store of cereal containers.**
//!
//! A storage holds one container per [`Cereal`](model::Cereal) kind. Every container
//! has the same capacity, and the storage capacity caps how many containers can be
//! open at once: `floor(storage_capacity / container_capacity)`.
//!
//! ## Core Concepts
//!
//! ### Leftovers instead of overflow
//! Adding more cereal than a container can take fills it to the brim and returns the
//! rest as leftover. Taking more than is stored takes everything there is.
//!
//! ### Containers come and go
//! The first add for a kind opens its container, provided a slot is free. A container
//! is only removed on request, and only once it is empty.
//!
//! ### Typed errors
//! Every failure is a [`StorageError`](storage::StorageError): an invalid argument, a
//! storage with no free slot, or a missing container. A failed call changes nothing.
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`storage`])
//! [`CerealStorage`](storage::CerealStorage) and its implementation
//! [`CerealStorageImpl`](storage::CerealStorageImpl). Plain data, mutated through
//! `&mut self`, no locks and no I/O.
//!
//! ### 2. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) that owns entities in one
//! Tokio task and applies requests sequentially. Sharing storages between tasks
//! goes through it.
//!
//! ### 3. The Storage Actor ([`storage_actor`])
//! Plugs [`CerealStorageImpl`](storage::CerealStorageImpl) into the engine; every
//! storage operation becomes a [`StorageAction`](storage_actor::StorageAction).
//!
//! ### 4. The Interface ([`clients`])
//! [`StorageClient`](clients::StorageClient) hides message passing behind async
//! methods named after the storage operations.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`StorageSystem`](lifecycle::StorageSystem) starts and stops the actor;
//! [`setup_tracing`](lifecycle::setup_tracing) configures logging.
//!
//! ## Quick Start
//!
//! ```rust
//! use cereal_storage::model::Cereal;
//! use cereal_storage::storage::{CerealStorage, CerealStorageImpl, StorageError};
//!
//! let mut storage = CerealStorageImpl::new(10.0, 22.0)?;
//! assert_eq!(storage.add_cereal(Cereal::Rice, 12.0)?, 2.0);
//! assert_eq!(storage.get_cereal(Cereal::Rice, 4.0)?, 4.0);
//! assert_eq!(storage.get_space(Cereal::Rice)?, 4.0);
//! # Ok::<(), StorageError>(())
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod storage;
pub mod storage_actor;
