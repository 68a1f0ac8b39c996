//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`], but the requests are answered
//! from a queue of scripted expectations instead of a store. Use it to test code that
//! *uses* a client (domain clients, HTTP handlers) without spawning an actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted replies) | Real `ResourceStore` |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Use Case** | Logic *around* the client | The store or the full system |
//!
//! ## Fluent API
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::validation::{Validate, ValidationErrors};
//! use resource_framework::{FrameworkError, Resource};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { id: u32, label: String }
//! #[derive(Debug)] struct TagInput;
//! impl Validate for TagInput {
//!     fn validate(&self) -> Result<(), ValidationErrors> { Ok(()) }
//! }
//! impl Resource for Tag {
//!     type Id = u32; type Create = TagInput; type Update = TagInput; type Filter = ();
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(id: u32, _: TagInput) -> Self { Self { id, label: String::new() } }
//!     fn apply_update(&mut self, _: TagInput) {}
//!     fn matches(&self, _: &()) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Tag { id: 1, label: "rust".into() });
//!     mock.expect_delete(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().label, "rust");
//!     assert!(matches!(client.delete(1).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw Helpers
//!
//! [`create_mock_client`] returns a client plus the receiving end of its channel, and
//! `expect_*` functions pull the next request off that receiver. Reach for these when the
//! test needs to inspect the payload that was sent.

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply to one request, tracked by `MockClient` in FIFO order.
enum Expectation<T: Resource> {
    List(Result<Vec<T>, FrameworkError>),
    Get(T::Id, Result<T, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Update(T::Id, Result<(), FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Search(Result<Vec<T>, FrameworkError>),
    Sample(Result<Option<T>, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. A request of the
/// wrong kind, or for the wrong id, panics the mock task; the caller then sees
/// [`FrameworkError::ActorDropped`] and [`MockClient::verify`] reports the leftovers.
pub struct MockClient<T: Resource> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Resource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation lock poisoned")
                    .pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |r| Expectation::Get(id, r))
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Delete(id, r))
    }

    pub fn expect_search(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::Search)
    }

    pub fn expect_sample(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Sample)
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation lock poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: Resource, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
}

impl<T: Resource, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("mock expectation lock poisoned")
            .push_back(expectation);
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn answer<T: Resource>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => reply(respond_to, r),
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, r))) => {
            assert_eq!(id, expected, "get called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update(expected, r))) => {
            assert_eq!(id, expected, "update called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, r))) => {
            assert_eq!(id, expected, "delete called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Search { respond_to, .. }, Some(Expectation::Search(r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::Sample { respond_to }, Some(Expectation::Sample(r))) => {
            reply(respond_to, r)
        }
        (request, _) => panic!("Unexpected request or expectation mismatch: {request:?}"),
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Nothing answers the requests until the test pulls them off the receiver with one
/// of the `expect_*` helpers below and sends a reply on the returned responder.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Search { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::validation::{Validate, ValidationErrors};

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        email: String,
    }

    #[derive(Debug)]
    struct UserInput {
        email: String,
    }

    impl Validate for UserInput {
        fn validate(&self) -> Result<(), ValidationErrors> {
            Ok(())
        }
    }

    impl Resource for User {
        type Id = u32;
        type Create = UserInput;
        type Update = UserInput;
        type Filter = String;

        fn id(&self) -> u32 {
            self.id
        }

        fn from_create_params(id: u32, params: UserInput) -> Self {
            Self {
                id,
                email: params.email,
            }
        }

        fn apply_update(&mut self, update: UserInput) {
            self.email = update.email;
        }

        fn matches(&self, filter: &String) -> bool {
            self.email.contains(filter.as_str())
        }
    }

    fn user(id: u32, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(UserInput {
                    email: "test@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.email, "test@example.com");
        responder.send(Ok(user(1, &payload.email))).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(u) if u.id == 1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<User>::new();

        mock.expect_create().return_ok(user(1, "a@example.com"));
        mock.expect_list().return_ok(vec![user(1, "a@example.com")]);
        mock.expect_update(1).return_ok(());
        mock.expect_get(2)
            .return_err(StoreError::NotFound("2".to_string()).into());

        let client = mock.client();

        let created = client
            .create(UserInput {
                email: "a@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.list().await.unwrap().len(), 1);
        client
            .update(
                1,
                UserInput {
                    email: "b@example.com".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(matches!(
            client.get(2).await,
            Err(FrameworkError::Store(StoreError::NotFound(_)))
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<User>::new();
        mock.expect_sample().return_ok(None);

        let result = mock.client().delete(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_leftovers() {
        let mut mock = MockClient::<User>::new();
        mock.expect_search().return_ok(vec![]);
        mock.verify();
    }
}
