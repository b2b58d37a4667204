use crate::clients::{HttpResourceClient, ResourceRepository, TransportError};
use crate::collection;
use crate::config::{Backend, Config};
use crate::model::ResourceDraft;
use crate::screens::{GalleryScreen, ManageScreen};
use crate::store::ResourceStore;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The running application: one store shared by both screens.
///
/// # Example
///
/// ```rust
/// use resource_library::config::Config;
/// use resource_library::lifecycle::{sample_resources, ResourceApp};
///
/// #[tokio::main]
/// async fn main() {
///     let mut app = ResourceApp::in_memory(sample_resources(), &Config::default());
///     app.start().await.unwrap();
///
///     app.gallery.on_search_change("rust");
///     assert!(!app.gallery.items().is_empty());
///
///     app.shutdown().await.unwrap();
/// }
/// ```
pub struct ResourceApp {
    pub store: Arc<ResourceStore>,
    pub gallery: GalleryScreen,
    pub manage: ManageScreen,

    /// Background tasks (the in-memory collection) awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl ResourceApp {
    /// Wires the store and both screens over `repository`. Nothing is fetched
    /// until [`start`](Self::start).
    pub fn new(repository: Arc<dyn ResourceRepository>, config: &Config) -> Self {
        let store = Arc::new(ResourceStore::new(repository, config.mutation_strategy()));
        Self {
            gallery: GalleryScreen::new(store.clone()),
            manage: ManageScreen::new(store.clone()),
            store,
            handles: Vec::new(),
        }
    }

    /// Backed by the hosted collection at `config.base_url`.
    pub fn remote(config: &Config) -> Self {
        info!(base_url = %config.base_url, "Using remote collection");
        Self::new(Arc::new(HttpResourceClient::new(config.base_url.clone())), config)
    }

    /// Backed by an in-process collection holding `seed`.
    ///
    /// Spawns the collection task, so it must be called inside a Tokio runtime.
    pub fn in_memory(seed: impl IntoIterator<Item = ResourceDraft>, config: &Config) -> Self {
        let (actor, client) = collection::new();
        let actor = actor.with_seed(seed);
        let handle = tokio::spawn(actor.run());
        info!("Using in-memory collection");

        let mut app = Self::new(Arc::new(client), config);
        app.handles.push(handle);
        app
    }

    /// Picks the backend named by `config.backend`. The in-memory backend is
    /// seeded with [`sample_resources`].
    pub fn from_config(config: &Config) -> Self {
        match config.backend {
            Backend::Remote => Self::remote(config),
            Backend::Memory => Self::in_memory(sample_resources(), config),
        }
    }

    /// Initial load of the shared snapshot.
    pub async fn start(&self) -> Result<usize, TransportError> {
        self.store.refresh().await
    }

    /// Drops the screens and the store, which closes the in-memory collection's
    /// channel, then waits for its task to finish.
    ///
    /// Any other clone of [`store`](Self::store) still alive keeps the
    /// collection open, and this call waits for it.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down");
        drop(self.gallery);
        drop(self.manage);
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Background task failed");
                return Err(e.into());
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}

/// A handful of records for the offline backend.
pub fn sample_resources() -> Vec<ResourceDraft> {
    vec![
        ResourceDraft::new(
            "The Rust Programming Language",
            "The official book, from ownership to fearless concurrency",
            "https://doc.rust-lang.org/book/img/ferris/does_not_compile.svg",
        )
        .with_source("https://doc.rust-lang.org/book/"),
        ResourceDraft::new(
            "Rust by Example",
            "Runnable examples for every language feature",
            "https://doc.rust-lang.org/rust-by-example/favicon.png",
        )
        .with_source("https://doc.rust-lang.org/rust-by-example/"),
        ResourceDraft::new(
            "Diseño de APIs REST",
            "Recursos, verbos y códigos de estado",
            "https://img.example.org/rest.png",
        ),
        ResourceDraft::new(
            "Async Rust",
            "Futures, executors and the Tokio runtime",
            "https://tokio.rs/img/tokio-horizontal.svg",
        )
        .with_source("https://tokio.rs/tokio/tutorial"),
        ResourceDraft::new(
            "Programación funcional",
            "Iteradores, cierres y composición",
            "https://img.example.org/fp.png",
        ),
        ResourceDraft::new(
            "Rustlings",
            "Small exercises to get used to reading and writing Rust",
            "https://img.example.org/rustlings.png",
        )
        .with_source("https://github.com/rust-lang/rustlings"),
    ]
}
