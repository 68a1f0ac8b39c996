//! # Quote Actor
//!
//! The Quote resource actor. Unlike products, the quote store starts out populated with
//! [`seed::default_quotes`], and clients get two extra read paths on top of CRUD:
//! a keyword search over quote content and a random pick.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_framework::Resource) implementation for [`Quote`]
//! - [`error`] - [`QuoteError`] type for type-safe error handling
//! - [`seed`] - The initial quote set
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::model::Quote;
use resource_framework::{ResourceActor, ResourceClient, ResourceStore, StoreError};

/// Creates a new Quote actor and its client, seeded unless `seeded` is false.
///
/// # Errors
/// Whatever [`ResourceStore::with_records`] reports for the seed set.
pub fn new(
    buffer_size: usize,
    seeded: bool,
) -> Result<(ResourceActor<Quote>, ResourceClient<Quote>), StoreError> {
    if !seeded {
        return Ok(ResourceActor::new(buffer_size));
    }
    let store = ResourceStore::with_records(seed::default_quotes())?;
    Ok(ResourceActor::with_store(buffer_size, store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_actor_builds() {
        assert!(new(1, true).is_ok());
        assert!(new(1, false).is_ok());
    }
}
