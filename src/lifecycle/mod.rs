//! # Application Lifecycle
//!
//! [`ResourceApp`] is the composition root: it picks a repository (hosted
//! collection or in-memory actor), builds the shared
//! [`ResourceStore`](crate::store::ResourceStore), hands it to both screens,
//! and on [`shutdown`](ResourceApp::shutdown) closes the channels and awaits
//! the background task.
//!
//! ```text
//! Config ──► ResourceApp ──► Arc<ResourceStore> ──┬──► GalleryScreen
//!                 │                                └──► ManageScreen
//!                 └──► HttpResourceClient | CollectionClient ──► CollectionActor task
//! ```
//!
//! Also home to [`setup_tracing`] and the [`LogFailure`] extension.

pub mod app;
pub mod failure;
pub mod tracing;

pub use app::*;
pub use failure::LogFailure;
pub use tracing::setup_tracing;
