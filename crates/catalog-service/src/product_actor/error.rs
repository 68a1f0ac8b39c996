//! Error types for the Product actor.

use resource_framework::validation::ValidationErrors;
use resource_framework::{FrameworkError, StoreError};
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The payload violated one or more declared constraints.
    #[error("Invalid product: {0}")]
    Validation(ValidationErrors),

    /// The store has handed out every id it can represent.
    #[error("No product ids left to assign")]
    IdsExhausted,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Store(StoreError::NotFound(id)) => ProductError::NotFound(id),
            FrameworkError::Store(StoreError::Validation(errors)) => {
                ProductError::Validation(errors)
            }
            FrameworkError::Store(StoreError::IdsExhausted) => ProductError::IdsExhausted,
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
