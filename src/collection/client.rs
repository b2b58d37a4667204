//! # Collection Client
//!
//! [`ResourceRepository`] implementation that forwards every operation to a
//! [`CollectionActor`](crate::collection::CollectionActor) and awaits its reply.

use crate::clients::{ResourceRepository, TransportError};
use crate::collection::CollectionRequest;
use crate::model::{Resource, ResourceDraft, ResourceId};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// Cheap to clone; holds only the request sender.
#[derive(Clone)]
pub struct CollectionClient {
    sender: mpsc::Sender<CollectionRequest>,
}

impl CollectionClient {
    pub fn new(sender: mpsc::Sender<CollectionRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        request: CollectionRequest,
        response: oneshot::Receiver<Result<T, TransportError>>,
    ) -> Result<T, TransportError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| TransportError::Unavailable)?;
        response.await.map_err(|_| TransportError::Unavailable)?
    }
}

#[async_trait]
impl ResourceRepository for CollectionClient {
    async fn list(&self) -> Result<Vec<Resource>, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.call(CollectionRequest::List { respond_to }, response)
            .await
    }

    async fn get(&self, id: &ResourceId) -> Result<Resource, TransportError> {
        let (respond_to, response) = oneshot::channel();
        let request = CollectionRequest::Get {
            id: id.clone(),
            respond_to,
        };
        self.call(request, response).await
    }

    async fn create(&self, draft: &ResourceDraft) -> Result<Resource, TransportError> {
        let (respond_to, response) = oneshot::channel();
        let request = CollectionRequest::Create {
            draft: draft.clone(),
            respond_to,
        };
        self.call(request, response).await
    }

    async fn update(
        &self,
        id: &ResourceId,
        draft: &ResourceDraft,
    ) -> Result<Resource, TransportError> {
        let (respond_to, response) = oneshot::channel();
        let request = CollectionRequest::Update {
            id: id.clone(),
            draft: draft.clone(),
            respond_to,
        };
        self.call(request, response).await
    }

    async fn delete(&self, id: &ResourceId) -> Result<(), TransportError> {
        let (respond_to, response) = oneshot::channel();
        let request = CollectionRequest::Delete {
            id: id.clone(),
            respond_to,
        };
        self.call(request, response).await
    }
}
