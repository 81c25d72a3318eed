//! Custom actions for the storage actor.
//!
//! Each [`StorageAction`] runs one [`CerealStorage`](crate::storage::CerealStorage)
//! operation against a storage owned by the actor. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::Cereal;

/// Operations that can be performed on a storage.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageAction {
    /// Puts cereal into its container. Fails with `InvalidArgument` or `CapacityExceeded`.
    AddCereal { cereal: Cereal, amount: f32 },
    /// Takes cereal out of its container. Fails with `InvalidArgument`.
    GetCereal { cereal: Cereal, amount: f32 },
    /// Removes an empty container.
    RemoveContainer(Cereal),
    /// Reads the amount held for a cereal.
    GetAmount(Cereal),
    /// Reads the free space of a container. Fails with `NotFound`.
    GetSpace(Cereal),
    /// Renders the storage listing.
    Describe,
}

/// Results from StorageActions - variants match 1:1 with StorageAction
#[derive(Debug, Clone, PartialEq)]
pub enum StorageActionResult {
    /// Leftover that did not fit
    AddCereal(f32),
    /// Amount actually taken
    GetCereal(f32),
    /// Whether the container was removed
    RemoveContainer(bool),
    GetAmount(f32),
    GetSpace(f32),
    Describe(String),
}
