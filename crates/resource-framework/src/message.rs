//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::Resource;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto [`ResourceStore`](crate::ResourceStore) operations:
/// the four CRUD verbs plus `List`, and the read-only `Search` and `Sample` queries.
///
/// The enum is generic over `T: Resource` and uses its associated types, so a
/// `Quote` payload can never be sent to a `Product` actor.
#[derive(Debug)]
pub enum ResourceRequest<T: Resource> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<()>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Search {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Sample {
        respond_to: Response<Option<T>>,
    },
}
