//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for any binary built on the framework.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with seeded size) and shutdown (with final size)
//! - **Store Operations**: Create, Update and Delete at `info`; List, Get, Search and
//!   Sample at `debug`; not-found and rejected payloads at `warn`
//! - **Client Calls**: one span per call via `#[instrument]`
//!
//! ## Usage
//!
//! ```bash
//! # Mutations only
//! RUST_LOG=info cargo run
//!
//! # Full payloads, reads included
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework
//! RUST_LOG=resource_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create/delete round trip reads:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=0
//! INFO create: Created entity_type="Product" id=1 size=1
//! INFO delete: Deleted entity_type="Product" id=1 size=0
//! ```

/// Initializes the global subscriber. Honours `RUST_LOG`; call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
