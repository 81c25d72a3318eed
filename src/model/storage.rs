//! Identifiers and configuration DTOs for storages.
//!
//! [`StorageConfig`] is the creation payload for a storage managed by the
//! [`ResourceActor`](crate::framework::ResourceActor); [`StorageId`] is the key the
//! actor hands back.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Environment variable holding the per-container capacity.
pub const CONTAINER_CAPACITY_VAR: &str = "CEREAL_CONTAINER_CAPACITY";
/// Environment variable holding the total storage capacity.
pub const STORAGE_CAPACITY_VAR: &str = "CEREAL_STORAGE_CAPACITY";

pub const DEFAULT_CONTAINER_CAPACITY: f32 = 10.0;
pub const DEFAULT_STORAGE_CAPACITY: f32 = 22.0;

/// Type-safe identifier for storages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageId(pub u32);

impl From<u32> for StorageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for StorageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "storage_{}", self.0)
    }
}

/// Capacities a storage is built with.
///
/// The pair is only validated when the storage is constructed, see
/// [`CerealStorageImpl::new`](crate::storage::CerealStorageImpl::new).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub container_capacity: f32,
    pub storage_capacity: f32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            container_capacity: DEFAULT_CONTAINER_CAPACITY,
            storage_capacity: DEFAULT_STORAGE_CAPACITY,
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

impl StorageConfig {
    pub fn new(container_capacity: f32, storage_capacity: f32) -> Self {
        Self {
            container_capacity,
            storage_capacity,
        }
    }

    /// Reads capacities from `CEREAL_CONTAINER_CAPACITY` and `CEREAL_STORAGE_CAPACITY`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &'static str, default: f32| match lookup(var) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidNumber { var, value }),
        };

        Ok(Self {
            container_capacity: read(CONTAINER_CAPACITY_VAR, DEFAULT_CONTAINER_CAPACITY)?,
            storage_capacity: read(STORAGE_CAPACITY_VAR, DEFAULT_STORAGE_CAPACITY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_id_display() {
        assert_eq!(StorageId::from(3).to_string(), "storage_3");
    }

    #[test]
    fn test_from_lookup_uses_defaults() {
        let config = StorageConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorageConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = StorageConfig::from_lookup(|var| match var {
            CONTAINER_CAPACITY_VAR => Some("5".to_string()),
            STORAGE_CAPACITY_VAR => Some(" 12.5 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config, StorageConfig::new(5.0, 12.5));
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let result = StorageConfig::from_lookup(|var| {
            (var == STORAGE_CAPACITY_VAR).then(|| "lots".to_string())
        });
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                var: STORAGE_CAPACITY_VAR,
                value: "lots".to_string(),
            })
        );
    }
}
