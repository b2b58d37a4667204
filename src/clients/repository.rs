//! # ResourceRepository Trait
//!
//! The contract every backend of the remote collection fulfils: five operations,
//! one round-trip each, no local state.
use crate::clients::TransportError;
use crate::model::{Resource, ResourceDraft, ResourceId};
use async_trait::async_trait;

/// CRUD access to the remote resource collection.
///
/// Implementations must not retry and must not cache. Ordering of `list` is
/// whatever the backend returns.
///
/// # Implementations
///
/// - [`HttpResourceClient`](crate::clients::HttpResourceClient) - the hosted REST endpoint
/// - [`CollectionClient`](crate::collection::CollectionClient) - the in-memory collection task
/// - [`MockRepository`](crate::clients::mock::MockRepository) - scripted responses for tests
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<Resource>, TransportError>;

    /// Fetch a single record.
    async fn get(&self, id: &ResourceId) -> Result<Resource, TransportError>;

    /// Create a record; the collection assigns the id.
    async fn create(&self, draft: &ResourceDraft) -> Result<Resource, TransportError>;

    /// Replace every field of an existing record.
    async fn update(&self, id: &ResourceId, draft: &ResourceDraft)
        -> Result<Resource, TransportError>;

    /// Remove a record.
    async fn delete(&self, id: &ResourceId) -> Result<(), TransportError>;
}
