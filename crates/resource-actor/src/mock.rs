//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running actor. It lets you test wrapper logic (e.g. a
//! `ProductClient`) deterministically, including failures that are awkward to provoke with a
//! real actor such as a closed channel.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (expectations) | Real collection + storage |
//! | **Determinism** | 100% | Sequential, also deterministic |
//! | **Use Case** | Logic *around* the client | The actor itself or a full session |
//! | **Error Injection** | Easy (`return_err`) | Needs crafted state |
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note { id: u32 }
//!
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note { id: 1 }));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Requests are matched strictly in order; an unexpected request panics inside the mock task,
//! which the caller observes as [`FrameworkError::ActorDropped`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response, UpsertOutcome};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// An expected request and the canned reply for it.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Upsert {
        response: Result<UpsertOutcome, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<bool, FrameworkError>,
    },
    KeyExists {
        key: String,
        response: Result<bool, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().ok().and_then(|mut exps| exps.pop_front());
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
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_upsert(&mut self) -> ExpectationBuilder<T, UpsertOutcome> {
        self.builder(|response| Expectation::Upsert { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects a uniqueness probe for the already-normalised `key`.
    pub fn expect_key_exists(&mut self, key: impl Into<String>) -> ExpectationBuilder<T, bool> {
        let key = key.into();
        self.builder(move |response| Expectation::KeyExists { key, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().map(|exps| exps.len()).unwrap_or(0);
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        if let Ok(mut exps) = self.expectations.lock() {
            exps.push_back(expectation);
        }
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            assert_eq!(id, want, "get called with unexpected id");
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Upsert { respond_to, .. }, Some(Expectation::Upsert { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            assert_eq!(id, want, "delete called with unexpected id");
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::KeyExists {
                key, respond_to, ..
            },
            Some(Expectation::KeyExists { key: want, response }),
        ) => {
            assert_eq!(key, want, "key_exists called with unexpected key");
            let _ = respond_to.send(response);
        }
        (request, _) => {
            panic!("Unexpected request or expectation mismatch: {request:?}");
        }
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and hands back the receiver so a test can play the actor itself.
///
/// Useful when the test needs to inspect the exact payload (e.g. the item sent to `upsert`).
/// Consider [`MockClient`] when only the replies matter.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Upsert request.
pub async fn expect_upsert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<UpsertOutcome>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Upsert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a KeyExists request.
pub async fn expect_key_exists<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Option<T::Id>, Response<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::KeyExists {
            key,
            except,
            respond_to,
        }) => Some((key, except, respond_to)),
        _ => None,
    }
}
