//! # Cereal Storage
//!
//! The in-memory core: a bounded set of containers, one per [`Cereal`] kind.
//!
//! - [`CerealStorage`] - the operations every storage offers
//! - [`CerealStorageImpl`] - the `HashMap`-backed implementation
//! - [`StorageError`] - invalid arguments, full storage, missing container
//!
//! Storages are plain data and are mutated through `&mut self`. To share one
//! between tasks, hand it to the storage actor instead of wrapping it in a lock;
//! see [`storage_actor`](crate::storage_actor).

mod cereal_storage;
pub mod error;

pub use cereal_storage::*;
pub use error::*;

use crate::model::Cereal;

/// Operations on a bounded cereal storage.
///
/// Quantities are `f32` in an arbitrary unit shared by both capacities.
pub trait CerealStorage {
    /// Maximum quantity a single container may hold.
    fn container_capacity(&self) -> f32;

    /// Total capacity of the storage, in the same unit.
    fn storage_capacity(&self) -> f32;

    /// Puts `amount` of `cereal` into its container, opening one if needed.
    ///
    /// Returns the leftover that did not fit into the container.
    ///
    /// # Errors
    /// - [`StorageError::InvalidArgument`] if `amount` is negative.
    /// - [`StorageError::CapacityExceeded`] if the cereal has no container and every
    ///   slot is already taken.
    fn add_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, StorageError>;

    /// Takes up to `amount` of `cereal` out of its container and returns what was taken.
    ///
    /// The container stays in place even when it becomes empty. A cereal without a
    /// container yields 0 and no container is created.
    ///
    /// # Errors
    /// [`StorageError::InvalidArgument`] if `amount` is negative.
    fn get_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, StorageError>;

    /// Removes the container of `cereal` if it exists and is empty.
    fn remove_container(&mut self, cereal: Cereal) -> bool;

    /// Quantity of `cereal` currently held, 0 when it has no container.
    fn get_amount(&self, cereal: Cereal) -> f32;

    /// Free space left in the container of `cereal`.
    ///
    /// # Errors
    /// [`StorageError::NotFound`] if the cereal has no container.
    fn get_space(&self, cereal: Cereal) -> Result<f32, StorageError>;

    /// Human-readable listing of the containers.
    fn describe(&self) -> String;
}
