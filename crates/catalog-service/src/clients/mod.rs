//! Type-safe wrappers around the generic [`ResourceClient`](resource_framework::ResourceClient).
//!
//! `list`, `get` and `delete` come from [`ActorClient`](resource_framework::ActorClient);
//! payload-carrying operations are spelled out per resource.

pub mod product_client;
pub mod quote_client;

pub use product_client::ProductClient;
pub use quote_client::QuoteClient;
