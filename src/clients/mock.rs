//! # Mock Repository
//!
//! Scripted [`ResourceRepository`] for testing the store, the form and the
//! screens without any backend.
//!
//! ## When to use the Mock vs the In-Memory Collection
//!
//! | Feature | MockRepository | CollectionClient |
//! |---------|----------------|------------------|
//! | **State** | None (scripted responses) | Real ordered collection |
//! | **Error Injection** | Easy (`return_err`) | Only not-found / closed |
//! | **Call assertions** | [`MockRepository::calls`] | No |
//! | **Use Case** | "No request was sent", failure paths | End-to-end CRUD flows |
//!
//! ## Example
//!
//! ```rust
//! use resource_library::clients::mock::{MockRepository, RecordedCall};
//! use resource_library::clients::ResourceRepository;
//! use resource_library::model::{Resource, ResourceId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockRepository::new();
//!     mock.expect_list().return_ok(vec![Resource {
//!         id: ResourceId::from("1"),
//!         title: "Ownership".into(),
//!         description: "The book chapter".into(),
//!         url: "https://img/1.png".into(),
//!         source: None,
//!     }]);
//!
//!     let listed = mock.list().await.unwrap();
//!     assert_eq!(listed.len(), 1);
//!     assert_eq!(mock.calls(), vec![RecordedCall::List]);
//!     mock.verify();
//! }
//! ```

use crate::clients::{ResourceRepository, TransportError};
use crate::model::{Resource, ResourceDraft, ResourceId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response it should produce.
enum Expectation {
    List {
        response: Result<Vec<Resource>, TransportError>,
    },
    Get {
        id: ResourceId,
        response: Result<Resource, TransportError>,
    },
    Create {
        response: Result<Resource, TransportError>,
    },
    Update {
        id: ResourceId,
        response: Result<Resource, TransportError>,
    },
    Delete {
        id: ResourceId,
        response: Result<(), TransportError>,
    },
}

impl Expectation {
    fn name(&self) -> &'static str {
        match self {
            Expectation::List { .. } => "list",
            Expectation::Get { .. } => "get",
            Expectation::Create { .. } => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
        }
    }
}

/// A request the mock received, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List,
    Get(ResourceId),
    Create(ResourceDraft),
    Update(ResourceId, ResourceDraft),
    Delete(ResourceId),
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A repository that answers from a queue of expectations.
///
/// Requests must arrive in the order the expectations were queued; a request
/// that does not match the head of the queue panics. Cloning shares the queue
/// and the call log.
#[derive(Clone, Default)]
pub struct MockRepository {
    expectations: Queue,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares this mock as a trait object for injection into a store.
    pub fn repository(&self) -> Arc<dyn ResourceRepository> {
        Arc::new(self.clone())
    }

    pub fn expect_list(&self) -> ExpectationBuilder<Vec<Resource>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    pub fn expect_get(&self, id: impl Into<ResourceId>) -> ExpectationBuilder<Resource> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    pub fn expect_create(&self) -> ExpectationBuilder<Resource> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Create { response }
        })
    }

    pub fn expect_update(&self, id: impl Into<ResourceId>) -> ExpectationBuilder<Resource> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    pub fn expect_delete(&self, id: impl Into<ResourceId>) -> ExpectationBuilder<()> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Every request received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<_> = exps.iter().map(Expectation::name).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                exps.len(),
                pending
            );
        }
    }

    fn next(&self, call: RecordedCall) -> Expectation {
        self.calls.lock().unwrap().push(call.clone());
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(e) => e,
            None => panic!("Unexpected request {:?}: no expectation queued", call),
        }
    }
}

/// Builder returned by the `expect_*` methods; queues the response.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    make: Box<dyn FnOnce(Result<T, TransportError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        expectations: Queue,
        make: impl FnOnce(Result<T, TransportError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, TransportError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[async_trait]
impl ResourceRepository for MockRepository {
    async fn list(&self) -> Result<Vec<Resource>, TransportError> {
        match self.next(RecordedCall::List) {
            Expectation::List { response } => response,
            other => panic!("Expected {} request, got list", other.name()),
        }
    }

    async fn get(&self, id: &ResourceId) -> Result<Resource, TransportError> {
        match self.next(RecordedCall::Get(id.clone())) {
            Expectation::Get { id: expected, response } => {
                assert_eq!(&expected, id, "get called with unexpected id");
                response
            }
            other => panic!("Expected {} request, got get", other.name()),
        }
    }

    async fn create(&self, draft: &ResourceDraft) -> Result<Resource, TransportError> {
        match self.next(RecordedCall::Create(draft.clone())) {
            Expectation::Create { response } => response,
            other => panic!("Expected {} request, got create", other.name()),
        }
    }

    async fn update(
        &self,
        id: &ResourceId,
        draft: &ResourceDraft,
    ) -> Result<Resource, TransportError> {
        match self.next(RecordedCall::Update(id.clone(), draft.clone())) {
            Expectation::Update { id: expected, response } => {
                assert_eq!(&expected, id, "update called with unexpected id");
                response
            }
            other => panic!("Expected {} request, got update", other.name()),
        }
    }

    async fn delete(&self, id: &ResourceId) -> Result<(), TransportError> {
        match self.next(RecordedCall::Delete(id.clone())) {
            Expectation::Delete { id: expected, response } => {
                assert_eq!(&expected, id, "delete called with unexpected id");
                response
            }
            other => panic!("Expected {} request, got delete", other.name()),
        }
    }
}
