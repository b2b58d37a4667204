//! # In-Memory Collection
//!
//! A local stand-in for the hosted REST collection, built as an actor: a
//! [`CollectionActor`] owns the records in its own Tokio task and a cloneable
//! [`CollectionClient`] talks to it over a channel.
//!
//! Used as the offline backend of the demo binary and as the stateful fake in
//! tests.
//!
//! ## Usage
//!
//! ```rust
//! use resource_library::clients::ResourceRepository;
//! use resource_library::collection;
//! use resource_library::model::ResourceDraft;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = collection::new();
//!     let handle = tokio::spawn(actor.run());
//!
//!     let created = client
//!         .create(&ResourceDraft::new("Lifetimes", "Borrow checker basics", "https://img/l.png"))
//!         .await
//!         .unwrap();
//!     assert_eq!(created.id.as_str(), "1");
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

pub mod actor;
pub mod client;
pub mod message;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use message::{CollectionRequest, Response};

/// Creates an empty collection actor and its client.
pub fn new() -> (CollectionActor, CollectionClient) {
    CollectionActor::new(32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ResourceRepository, TransportError};
    use crate::model::{ResourceDraft, ResourceId};

    #[tokio::test]
    async fn test_collection_full_lifecycle() {
        let (actor, client) = new();
        let handle = tokio::spawn(actor.run());

        // 1. Create
        let first = client
            .create(&ResourceDraft::new("Ownership", "d1", "u1"))
            .await
            .unwrap();
        let second = client
            .create(&ResourceDraft::new("Traits", "d2", "u2").with_source("s2"))
            .await
            .unwrap();
        assert_eq!(first.id, ResourceId::from("1"));
        assert_eq!(second.id, ResourceId::from("2"));

        // 2. List keeps insertion order
        let titles: Vec<_> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Ownership", "Traits"]);

        // 3. Update replaces every field, source included
        let updated = client
            .update(&second.id, &ResourceDraft::new("Generics", "d3", "u3"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Generics");
        assert_eq!(updated.source, None);
        assert_eq!(client.get(&second.id).await.unwrap(), updated);

        // 4. Delete
        client.delete(&first.id).await.unwrap();
        let missing = client.get(&first.id).await;
        assert!(matches!(missing, Err(TransportError::Status { status: 404, .. })));

        // 5. Ids are never reused
        let third = client
            .create(&ResourceDraft::new("Macros", "d4", "u4"))
            .await
            .unwrap();
        assert_eq!(third.id, ResourceId::from("3"));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let (actor, client) = new();
        tokio::spawn(actor.run());

        let id = ResourceId::from("42");
        let draft = ResourceDraft::new("t", "d", "u");
        assert_eq!(client.update(&id, &draft).await.unwrap_err().status(), Some(404));
        assert_eq!(client.delete(&id).await.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn test_seeded_collection() {
        let (actor, client) = new();
        let actor = actor.with_seed(vec![
            ResourceDraft::new("A", "a", "a"),
            ResourceDraft::new("B", "b", "b"),
        ]);
        tokio::spawn(actor.run());

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].id, ResourceId::from("2"));
    }

    #[tokio::test]
    async fn test_closed_collection_is_unavailable() {
        let (actor, client) = new();
        drop(actor);

        let result = client.list().await;
        assert!(matches!(result, Err(TransportError::Unavailable)));
    }
}
