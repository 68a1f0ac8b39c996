//! # Product Actor
//!
//! This module implements the Product resource actor: an initially empty catalog of
//! products with validated names, prices and descriptions.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_framework::Resource) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_service::product_actor;
//! use catalog_service::clients::ProductClient;
//! use catalog_service::model::ProductInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let product = client
//!         .create_product(ProductInput {
//!             name: "Widget".to_string(),
//!             price: 9.99,
//!             description: String::new(),
//!         })
//!         .await?;
//!     assert_eq!(product.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
