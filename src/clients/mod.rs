//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod storage_client;

pub use actor_client::*;
pub use storage_client::*;
