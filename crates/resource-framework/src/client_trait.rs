//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `list`,
//! `get` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{FrameworkError, Resource, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the payload-free CRUD operations.
///
/// A domain client (e.g. `ProductClient`) wraps a [`ResourceClient`], names its own
/// error type and says how framework errors map onto it. `list`, `get` and `delete`
/// then come for free; only operations with domain payloads need hand-written methods.
///
/// # Example
///
/// ```rust
/// use resource_framework::validation::{Validate, ValidationErrors};
/// use resource_framework::{ActorClient, FrameworkError, Resource, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagInput;
/// impl Validate for TagInput {
///     fn validate(&self) -> Result<(), ValidationErrors> { Ok(()) }
/// }
/// impl Resource for Tag {
///     type Id = u32; type Create = TagInput; type Update = TagInput; type Filter = ();
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, _: TagInput) -> Self { Self { id } }
///     fn apply_update(&mut self, _: TagInput) {}
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error: {0}")]
/// struct TagError(String);
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // list(), get() and delete() are provided automatically!
///     let _ = client.list().await;
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: Resource>: Send + Sync {
    /// The resource-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every record in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
