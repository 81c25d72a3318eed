use super::{CerealStorage, StorageError};
use crate::model::{Cereal, StorageConfig};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::trace;

/// Listing returned by [`CerealStorage::describe`] when no container exists.
pub const EMPTY_STORAGE: &str = "Storage is empty";

/// A storage whose containers live in a `HashMap` keyed by cereal.
///
/// A container is opened by the first successful [`add_cereal`](CerealStorage::add_cereal)
/// for its kind (an add of 0 included) and closed only by
/// [`remove_container`](CerealStorage::remove_container) once it is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CerealStorageImpl {
    container_capacity: f32,
    storage_capacity: f32,
    containers: HashMap<Cereal, f32>,
}

impl CerealStorageImpl {
    /// Creates an empty storage.
    ///
    /// # Errors
    /// [`StorageError::InvalidArgument`] if `container_capacity` is negative or
    /// `storage_capacity` is smaller than `container_capacity`. NaN fails both checks.
    pub fn new(container_capacity: f32, storage_capacity: f32) -> Result<Self, StorageError> {
        if container_capacity.is_nan() || container_capacity < 0.0 {
            return Err(StorageError::InvalidArgument(format!(
                "container capacity must not be negative, got {container_capacity}"
            )));
        }
        if storage_capacity.is_nan() || storage_capacity < container_capacity {
            return Err(StorageError::InvalidArgument(format!(
                "storage capacity {storage_capacity} is smaller than container capacity {container_capacity}"
            )));
        }
        Ok(Self {
            container_capacity,
            storage_capacity,
            containers: HashMap::new(),
        })
    }

    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        Self::new(config.container_capacity, config.storage_capacity)
    }

    /// How many containers may be open at once: `floor(storage / container)`.
    ///
    /// A zero container capacity yields `usize::MAX` slots for a non-zero storage
    /// capacity and no slots when both are zero.
    pub fn max_containers(&self) -> usize {
        // float-to-int `as` saturates: inf -> usize::MAX, NaN (0/0) -> 0
        (self.storage_capacity / self.container_capacity).floor() as usize
    }

    /// Number of open containers.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn has_container(&self, cereal: Cereal) -> bool {
        self.containers.contains_key(&cereal)
    }

    /// Open containers and their quantities, ordered by cereal.
    pub fn containers(&self) -> Vec<(Cereal, f32)> {
        let mut entries: Vec<_> = self
            .containers
            .iter()
            .map(|(cereal, amount)| (*cereal, *amount))
            .collect();
        entries.sort_by_key(|(cereal, _)| *cereal);
        entries
    }
}

fn check_amount(amount: f32) -> Result<(), StorageError> {
    if amount >= 0.0 {
        Ok(())
    } else {
        Err(StorageError::InvalidArgument(format!(
            "amount must not be negative, got {amount}"
        )))
    }
}

impl CerealStorage for CerealStorageImpl {
    fn container_capacity(&self) -> f32 {
        self.container_capacity
    }

    fn storage_capacity(&self) -> f32 {
        self.storage_capacity
    }

    fn add_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, StorageError> {
        check_amount(amount)?;

        let current = match self.containers.get(&cereal) {
            Some(current) => *current,
            None => {
                let max_containers = self.max_containers();
                if self.containers.len() >= max_containers {
                    return Err(StorageError::CapacityExceeded { max_containers });
                }
                trace!(%cereal, "Opening container");
                0.0
            }
        };

        let free = self.container_capacity - current;
        let added = amount.min(free);
        self.containers.insert(cereal, current + added);
        Ok(amount - added)
    }

    fn get_cereal(&mut self, cereal: Cereal, amount: f32) -> Result<f32, StorageError> {
        check_amount(amount)?;

        let Some(current) = self.containers.get_mut(&cereal) else {
            return Ok(0.0);
        };
        let taken = amount.min(*current);
        *current -= taken;
        Ok(taken)
    }

    fn remove_container(&mut self, cereal: Cereal) -> bool {
        match self.containers.get(&cereal) {
            Some(amount) if *amount == 0.0 => {
                self.containers.remove(&cereal);
                trace!(%cereal, "Removed container");
                true
            }
            _ => false,
        }
    }

    fn get_amount(&self, cereal: Cereal) -> f32 {
        self.containers.get(&cereal).copied().unwrap_or(0.0)
    }

    fn get_space(&self, cereal: Cereal) -> Result<f32, StorageError> {
        let amount = self
            .containers
            .get(&cereal)
            .ok_or(StorageError::NotFound(cereal))?;
        Ok(self.container_capacity - amount)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for CerealStorageImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.containers.is_empty() {
            return f.write_str(EMPTY_STORAGE);
        }
        let listing = self
            .containers()
            .iter()
            .map(|(cereal, amount)| format!("{cereal}: {amount}"))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&listing)
    }
}
