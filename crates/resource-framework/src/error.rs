//! # Framework Errors
//!
//! This module defines the common error types used throughout the framework.
//! [`StoreError`] is what the synchronous store reports; [`FrameworkError`] adds the
//! failures that only exist once the store sits behind an actor channel.

use crate::validation::ValidationErrors;

/// Errors reported by a [`ResourceStore`](crate::ResourceStore) operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("No ids left to assign")]
    IdsExhausted,
}

/// Errors that can occur when talking to a [`ResourceActor`](crate::ResourceActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Store(#[from] StoreError),
}
