//! # Collection Actor
//!
//! The server half of the in-memory collection. It owns the records and
//! processes requests one at a time, so the store needs no locking.

use crate::clients::TransportError;
use crate::collection::{CollectionClient, CollectionRequest};
use crate::model::{Resource, ResourceDraft, ResourceId};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// An ordered collection of resources living in its own task.
///
/// Behaves like the hosted endpoint: ids come from a counter starting at 1 and
/// are never reused, `list` returns records in insertion order, and unknown ids
/// answer with a 404 status.
pub struct CollectionActor {
    receiver: mpsc::Receiver<CollectionRequest>,
    records: Vec<Resource>,
    next_id: u32,
}

impl CollectionActor {
    /// Creates the actor and the client used to reach it.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            next_id: 1,
        };
        (actor, CollectionClient::new(sender))
    }

    /// Inserts records before the actor starts serving, assigning ids in order.
    pub fn with_seed(mut self, seed: impl IntoIterator<Item = ResourceDraft>) -> Self {
        for draft in seed {
            self.insert(draft);
        }
        self
    }

    fn insert(&mut self, draft: ResourceDraft) -> Resource {
        let id = ResourceId::from(self.next_id);
        self.next_id += 1;
        let resource = Resource::from_draft(id, draft);
        self.records.push(resource.clone());
        resource
    }

    fn position(&self, id: &ResourceId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    /// Runs the event loop until every client is dropped.
    pub async fn run(mut self) {
        info!(size = self.records.len(), "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::List { respond_to } => {
                    debug!(size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
                CollectionRequest::Get { id, respond_to } => {
                    let found = self.position(&id).map(|i| self.records[i].clone());
                    debug!(%id, found = found.is_some(), "Get");
                    let _ = respond_to.send(found.ok_or_else(|| TransportError::not_found(&id)));
                }
                CollectionRequest::Create { draft, respond_to } => {
                    debug!(?draft, "Create");
                    let created = self.insert(draft);
                    info!(id = %created.id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(created));
                }
                CollectionRequest::Update {
                    id,
                    draft,
                    respond_to,
                } => {
                    debug!(%id, ?draft, "Update");
                    match self.position(&id) {
                        Some(i) => {
                            let updated = Resource::from_draft(id.clone(), draft);
                            self.records[i] = updated.clone();
                            info!(%id, "Updated");
                            let _ = respond_to.send(Ok(updated));
                        }
                        None => {
                            warn!(%id, "Not found");
                            let _ = respond_to.send(Err(TransportError::not_found(&id)));
                        }
                    }
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(%id, "Delete");
                    match self.position(&id) {
                        Some(i) => {
                            self.records.remove(i);
                            info!(%id, size = self.records.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(%id, "Not found");
                            let _ = respond_to.send(Err(TransportError::not_found(&id)));
                        }
                    }
                }
            }
        }

        info!(size = self.records.len(), "Shutdown");
    }
}
