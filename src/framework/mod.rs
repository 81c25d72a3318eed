//! Generic actor framework for resource management.
//!
//! A [`ResourceActor`] owns every entity of one type inside a single Tokio task and
//! answers requests one at a time; [`ResourceClient`]s are the cloneable handles that
//! send those requests. Together they form the exclusion boundary for shared state.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that manages entities
//! - [`ResourceClient`] - Type-safe async client for an actor
//! - [`ResourceRequest`] - The messages exchanged between the two
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
