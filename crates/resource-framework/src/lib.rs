//! # Resource Framework
//!
//! Building blocks for small in-memory CRUD services: an ordered, validated record store
//! and an actor that gives many concurrent callers safe access to it.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Resource`], [`validation::Validate`]): your record type, its
//!    create/update payloads and their declared constraints
//! 2. **Storage Layer** ([`ResourceStore`]): the ordered collection with id assignment,
//!    plain `&mut self` mutation and no locks
//! 3. **Runtime Layer** ([`ResourceActor`], [`ResourceClient`]): one Tokio task owns the
//!    store and serves requests from any number of cloned clients, one at a time
//!
//! You write the record type once; listing, lookup, id assignment, validation plumbing,
//! error reporting and logging come from the framework.
//!
//! ## Id Assignment
//!
//! A store hands out `1, 2, 3, …` from a high-water-mark counter. Deleting a record never
//! frees its id, so an id observed by a caller always refers to the same record or to
//! nothing at all. Seeded stores ([`ResourceStore::with_records`]) resume after the
//! largest seeded id.
//!
//! ## Errors
//!
//! - [`StoreError`]: `NotFound`, `Validation` (every violated constraint),
//!   `DuplicateId` (seeding only), `IdsExhausted` (the counter passed `u32::MAX`)
//! - [`FrameworkError`]: a `StoreError`, or the actor is gone (`ActorClosed` /
//!   `ActorDropped`)
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are processed **sequentially** within an actor (no locks needed!)
//! - Different resource types run in **parallel** on separate actors
//! - Dropping the last client closes the channel and the actor shuts down
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a scripted stand-in for an actor, plus raw
//! helpers for inspecting the exact requests a client sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;
pub mod validation;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::Resource;
pub use error::{FrameworkError, StoreError};
pub use message::{ResourceRequest, Response};
pub use store::ResourceStore;
