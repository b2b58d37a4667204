//! # Collection Messages
//!
//! Requests sent from a [`CollectionClient`](crate::collection::CollectionClient)
//! to the [`CollectionActor`](crate::collection::CollectionActor).

use crate::clients::TransportError;
use crate::model::{Resource, ResourceDraft, ResourceId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the collection.
pub type Response<T> = oneshot::Sender<Result<T, TransportError>>;

/// One variant per repository operation; each carries its reply channel.
#[derive(Debug)]
pub enum CollectionRequest {
    List {
        respond_to: Response<Vec<Resource>>,
    },
    Get {
        id: ResourceId,
        respond_to: Response<Resource>,
    },
    Create {
        draft: ResourceDraft,
        respond_to: Response<Resource>,
    },
    Update {
        id: ResourceId,
        draft: ResourceDraft,
        respond_to: Response<Resource>,
    },
    Delete {
        id: ResourceId,
        respond_to: Response<()>,
    },
}
