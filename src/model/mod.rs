//! Pure data structures: cereal kinds, storage identifiers and configuration.

pub mod cereal;
pub mod storage;

pub use cereal::*;
pub use storage::*;
