//! # System Lifecycle
//!
//! Starts the catalog's actors, hands out their clients and tears everything down again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests
//!    are drained
//! 3. **Actors log their final size** and return
//! 4. **Await completion** - a panicked task surfaces as [`LifecycleError::TaskFailed`]
//!
//! Clones handed to the HTTP layer keep the actors alive, so the router must be dropped
//! (i.e. `axum::serve` must return) before [`CatalogSystem::shutdown`] can complete.
//!
//! Logging is initialized separately through
//! [`resource_framework::tracing::setup_tracing`].

pub mod catalog_system;

pub use catalog_system::*;
