//! # Resource Trait
//!
//! The `Resource` trait defines the contract every record type (Product, Quote, …) must
//! implement to be kept in a [`ResourceStore`](crate::ResourceStore) and served by a
//! [`ResourceActor`](crate::ResourceActor).
//!
//! # Architecture Note
//! The store, the actor loop and the client are written *once* against this trait.
//! Associated types keep each resource honest: a `Product` store only accepts a
//! product payload, and the compiler rejects a quote payload sent to it.
//!
//! The store owns id assignment. A resource only says how to build itself from an id
//! plus a validated payload, and how to overwrite its own fields on update.

use crate::validation::Validate;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceStore`.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Integer identifier. Round-trips through `u32` so the store can run its counter.
    type Id: Copy
        + Eq
        + Hash
        + Display
        + Debug
        + Send
        + Sync
        + From<u32>
        + Into<u32>
        + 'static;

    /// The fields a caller supplies to create a record (everything but the id).
    type Create: Validate + Send + Sync + Debug;

    /// The replacement fields for an update. Every mutable field is overwritten.
    type Update: Validate + Send + Sync + Debug;

    /// Search criteria understood by [`Resource::matches`].
    type Filter: Send + Sync + Debug;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Build the record from its freshly assigned id and an already validated payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Overwrite the mutable fields with an already validated payload. Never touches the id.
    fn apply_update(&mut self, update: Self::Update);

    /// Whether this record satisfies `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
