//! Plain data types for the catalog: records, their input payloads and search filters.
//!
//! The [`Resource`](resource_framework::Resource) implementations live next to each
//! actor (see [`crate::product_actor::entity`] and [`crate::quote_actor::entity`]).

pub mod product;
pub mod quote;

pub use product::*;
pub use quote::*;
