//! # System Lifecycle
//!
//! Starting, wiring and stopping the storage actor.
//!
//! - [`StorageSystem`] - spawns the actor and owns its task handle
//! - [`setup_tracing`] - initializes logging, see the [`tracing`](self::tracing) module
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - the task handle is joined
//!
//! No queued request is lost: the actor answers everything sent before the last
//! client was dropped.

pub mod storage_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use storage_system::*;
