//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a
//! [`ResourceStore`] and serializes every access to it. It implements the "Server"
//! side of the Actor Model: messages are processed one at a time, so the store
//! itself never needs a lock.

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::error::{FrameworkError, StoreError};
use crate::message::ResourceRequest;
use crate::store::ResourceStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Concurrency Model
/// Any number of cloned [`ResourceClient`]s may send requests at the same time.
/// The actor drains its channel sequentially, so every store operation runs to
/// completion before the next one starts. Concurrent creates therefore always get
/// distinct ids, and a `List` never observes a half-applied update.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_store()` for seeded data)
///     to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client into whatever needs it. Dropping every clone stops the actor.
///
/// ```rust
/// use resource_framework::validation::{Validate, ValidationErrors, Validator};
/// use resource_framework::{Resource, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)]
/// struct NoteInput { text: String }
///
/// impl Validate for NoteInput {
///     fn validate(&self) -> Result<(), ValidationErrors> {
///         Validator::new().required("text", &self.text).finish()
///     }
/// }
///
/// impl Resource for Note {
///     type Id = u32;
///     type Create = NoteInput;
///     type Update = NoteInput;
///     type Filter = ();
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, p: NoteInput) -> Self { Self { id, text: p.text } }
///     fn apply_update(&mut self, u: NoteInput) { self.text = u.text; }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteInput { text: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct ResourceActor<T: Resource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
}

impl<T: Resource> ResourceActor<T> {
    /// Creates a new `ResourceActor` over an empty store, and its `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, ResourceStore::new())
    }

    /// Creates a `ResourceActor` that takes ownership of an existing store.
    pub fn with_store(buffer_size: usize, store: ResourceStore<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog_service::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items = self.store.list().to_vec();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.store.get(id).cloned();
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match self.store.create(params) {
                        Ok(item) => {
                            let item = item.clone();
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e.into()));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.store.update(id, update);
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Updated"),
                        Err(e) => log_failure(entity_type, id, "Update", e),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.store.delete(id).map(|_| ());
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => log_failure(entity_type, id, "Delete", e),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Search { filter, respond_to } => {
                    let hits: Vec<T> = self.store.search(&filter).into_iter().cloned().collect();
                    debug!(entity_type, ?filter, hits = hits.len(), "Search");
                    let _ = respond_to.send(Ok(hits));
                }
                ResourceRequest::Sample { respond_to } => {
                    let item = self.store.sample().cloned();
                    debug!(entity_type, found = item.is_some(), "Sample");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

fn log_failure<I: std::fmt::Display>(entity_type: &str, id: I, op: &str, e: &StoreError) {
    match e {
        StoreError::NotFound(_) => warn!(entity_type, %id, op, "Not found"),
        _ => warn!(entity_type, %id, op, error = %e, "Rejected"),
    }
}
