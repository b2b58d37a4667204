//! # Resource Store
//!
//! Holds the snapshot of the remote collection shared by every screen.
//!
//! ## Snapshot semantics
//!
//! The snapshot is an `Arc<Vec<Resource>>` kept in a `tokio::sync::watch`
//! channel. [`ResourceStore::refresh`] swaps in a whole new vector, so a reader
//! holding the previous `Arc` keeps a consistent view and never sees a
//! half-updated collection. Refreshes are not deduplicated: when two overlap,
//! whichever response arrives last wins.
//!
//! ## Mutations
//!
//! [`ResourceStore::create`], [`ResourceStore::update`] and
//! [`ResourceStore::delete`] forward to the repository and, once the remote
//! side accepted the change, bring the snapshot back in line according to the
//! [`MutationStrategy`]:
//!
//! - [`MutationStrategy::Refetch`]: a full `list()`; the snapshot is exactly
//!   what the server holds.
//! - [`MutationStrategy::OptimisticMerge`]: the server's answer is merged into
//!   the current snapshot without another round-trip.
//!
//! A failed refetch after a successful mutation is logged and the mutation
//! still reports success; the stale snapshot is corrected by the next refresh.

use crate::clients::{ResourceRepository, TransportError};
use crate::model::{Resource, ResourceDraft, ResourceId};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Shared, read-only view of the collection.
pub type Snapshot = Arc<Vec<Resource>>;

/// How the store resynchronizes after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStrategy {
    /// Re-fetch the whole collection.
    #[default]
    Refetch,
    /// Apply the server's response to the local snapshot.
    OptimisticMerge,
}

impl MutationStrategy {
    pub fn from_refetch_flag(refetch_on_mutation: bool) -> Self {
        if refetch_on_mutation {
            MutationStrategy::Refetch
        } else {
            MutationStrategy::OptimisticMerge
        }
    }
}

enum Mutation<'a> {
    Created(&'a Resource),
    Updated(&'a Resource),
    Deleted(&'a ResourceId),
}

pub struct ResourceStore {
    repository: Arc<dyn ResourceRepository>,
    strategy: MutationStrategy,
    snapshot: watch::Sender<Snapshot>,
}

impl ResourceStore {
    /// Creates a store with an empty snapshot. Call [`refresh`](Self::refresh)
    /// to load the collection.
    pub fn new(repository: Arc<dyn ResourceRepository>, strategy: MutationStrategy) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            repository,
            strategy,
            snapshot,
        }
    }

    pub fn repository(&self) -> &Arc<dyn ResourceRepository> {
        &self.repository
    }

    pub fn strategy(&self) -> MutationStrategy {
        self.strategy
    }

    /// The collection as of the last successful fetch (or merge).
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Receiver notified every time the snapshot is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    /// Replaces the snapshot with a fresh `list()`. On failure the previous
    /// snapshot is kept.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, TransportError> {
        debug!("Refreshing snapshot");
        let resources = self.repository.list().await.inspect_err(|e| {
            warn!(error = %e, "Refresh failed");
        })?;
        let size = resources.len();
        self.snapshot.send_replace(Arc::new(resources));
        info!(size, "Refreshed");
        Ok(size)
    }

    /// Single-record lookup; does not touch the snapshot.
    pub async fn get(&self, id: &ResourceId) -> Result<Resource, TransportError> {
        self.repository.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, draft: &ResourceDraft) -> Result<Resource, TransportError> {
        let created = self.repository.create(draft).await?;
        info!(id = %created.id, "Created");
        self.resync(Mutation::Created(&created)).await;
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: &ResourceId,
        draft: &ResourceDraft,
    ) -> Result<Resource, TransportError> {
        let updated = self.repository.update(id, draft).await?;
        info!(%id, "Updated");
        self.resync(Mutation::Updated(&updated)).await;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), TransportError> {
        self.repository.delete(id).await?;
        info!(%id, "Deleted");
        self.resync(Mutation::Deleted(id)).await;
        Ok(())
    }

    async fn resync(&self, mutation: Mutation<'_>) {
        match self.strategy {
            MutationStrategy::Refetch => {
                if let Err(e) = self.refresh().await {
                    warn!(error = %e, "Resync after mutation failed; snapshot is stale");
                }
            }
            MutationStrategy::OptimisticMerge => self.merge(mutation),
        }
    }

    fn merge(&self, mutation: Mutation<'_>) {
        self.snapshot.send_modify(|snapshot| {
            let records = Arc::make_mut(snapshot);
            match mutation {
                Mutation::Created(resource) | Mutation::Updated(resource) => {
                    match records.iter_mut().find(|r| r.id == resource.id) {
                        Some(existing) => *existing = resource.clone(),
                        None => records.push(resource.clone()),
                    }
                }
                Mutation::Deleted(id) => records.retain(|r| &r.id != id),
            }
            debug!(size = records.len(), "Merged");
        });
    }
}
