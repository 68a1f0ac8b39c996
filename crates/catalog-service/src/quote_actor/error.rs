//! Error types for the Quote actor.

use resource_framework::validation::ValidationErrors;
use resource_framework::{FrameworkError, StoreError};
use thiserror::Error;

/// Errors that can occur during quote operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    #[error("Quote not found: {0}")]
    NotFound(String),

    #[error("Invalid quote: {0}")]
    Validation(ValidationErrors),

    #[error("No quotes found matching your keyword.")]
    NoMatch,

    /// A random pick was requested from an empty store.
    #[error("No quotes available.")]
    Empty,

    /// The store has handed out every id it can represent.
    #[error("No quote ids left to assign")]
    IdsExhausted,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for QuoteError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Store(StoreError::NotFound(id)) => QuoteError::NotFound(id),
            FrameworkError::Store(StoreError::Validation(errors)) => QuoteError::Validation(errors),
            FrameworkError::Store(StoreError::IdsExhausted) => QuoteError::IdsExhausted,
            other => QuoteError::ActorCommunicationError(other.to_string()),
        }
    }
}
