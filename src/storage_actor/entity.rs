//! [`ActorEntity`] implementation for [`CerealStorageImpl`].
//!
//! Lets a [`ResourceActor`](crate::framework::ResourceActor) own storages and run
//! [`StorageAction`]s against them, one request at a time.

use super::actions::{StorageAction, StorageActionResult};
use crate::framework::ActorEntity;
use crate::model::{StorageConfig, StorageId};
use crate::storage::{CerealStorage, CerealStorageImpl, StorageError};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for CerealStorageImpl {
    type Id = StorageId;
    type Create = StorageConfig;
    type Action = StorageAction;
    type ActionResult = StorageActionResult;
    type Context = ();
    type Error = StorageError;

    /// Validates the capacity pair; an invalid config never reaches the store.
    fn from_create_params(_id: StorageId, config: StorageConfig) -> Result<Self, StorageError> {
        CerealStorageImpl::from_config(config)
    }

    /// Dispatches each action to the matching [`CerealStorage`] operation.
    async fn handle_action(
        &mut self,
        action: StorageAction,
        _ctx: &Self::Context,
    ) -> Result<StorageActionResult, StorageError> {
        let result = match action {
            StorageAction::AddCereal { cereal, amount } => {
                StorageActionResult::AddCereal(self.add_cereal(cereal, amount)?)
            }
            StorageAction::GetCereal { cereal, amount } => {
                StorageActionResult::GetCereal(self.get_cereal(cereal, amount)?)
            }
            StorageAction::RemoveContainer(cereal) => {
                StorageActionResult::RemoveContainer(self.remove_container(cereal))
            }
            StorageAction::GetAmount(cereal) => {
                StorageActionResult::GetAmount(self.get_amount(cereal))
            }
            StorageAction::GetSpace(cereal) => {
                StorageActionResult::GetSpace(self.get_space(cereal)?)
            }
            StorageAction::Describe => StorageActionResult::Describe(self.describe()),
        };
        Ok(result)
    }
}
