//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown, with the number of live storages
//! - **Storage requests**: `Create`, `Get`, `Delete` and every `Action` with its payload
//! - **Failures**: rejected actions as `warn` events carrying the storage ID and error
//! - **Containers**: opening and removal as `trace` events from the storage core
//!
//! ## Usage
//!
//! ```bash
//! # Lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every request and its outcome
//! RUST_LOG=debug cargo run
//!
//! # Container events as well
//! RUST_LOG=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` a single add looks like:
//!
//! ```text
//! DEBUG add_cereal{id=StorageId(1) cereal=Rice amount=6.0}: Sending request action=AddCereal { cereal: Rice, amount: 6.0 }
//! DEBUG Action entity_type="CerealStorageImpl" id=storage_1 action=AddCereal { cereal: Rice, amount: 6.0 }
//! DEBUG Action ok entity_type="CerealStorageImpl" id=storage_1 outcome=AddCereal(0.0)
//! ```

/// Initializes the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the source
        .compact()
        .init();
}
