//! The read-only library screen: accent-insensitive search and a detail modal.

use crate::clients::TransportError;
use crate::model::{Resource, ResourceId};
use crate::store::ResourceStore;
use crate::view_model::ListViewModel;
use std::sync::Arc;
use tracing::debug;

pub struct GalleryScreen {
    store: Arc<ResourceStore>,
    list: ListViewModel,
    detail: Option<ResourceId>,
}

impl GalleryScreen {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self {
            store,
            list: ListViewModel::gallery(),
            detail: None,
        }
    }

    pub fn store(&self) -> &Arc<ResourceStore> {
        &self.store
    }

    pub fn search(&self) -> &str {
        self.list.search()
    }

    pub fn on_search_change(&mut self, search: impl Into<String>) {
        self.list.set_search(search);
    }

    /// Matching records in snapshot order.
    pub fn items(&self) -> Vec<Resource> {
        self.list.project(&self.store.snapshot()).items
    }

    /// Pull-to-refresh.
    pub async fn on_refresh(&self) -> Result<usize, TransportError> {
        self.store.refresh().await
    }

    /// Opens the detail modal for `id` if the record is in the snapshot.
    pub fn open_detail(&mut self, id: &ResourceId) -> Option<Resource> {
        let found = self.store.snapshot().iter().find(|r| &r.id == id).cloned();
        debug!(%id, found = found.is_some(), "Open detail");
        if found.is_some() {
            self.detail = Some(id.clone());
        }
        found
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// The record shown in the modal, resolved against the current snapshot.
    /// `None` when closed or when the record has since been deleted.
    pub fn detail(&self) -> Option<Resource> {
        let id = self.detail.as_ref()?;
        self.store.snapshot().iter().find(|r| &r.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockRepository;
    use crate::model::ResourceDraft;
    use crate::store::MutationStrategy;

    fn resource(id: &str, title: &str) -> Resource {
        Resource::from_draft(ResourceId::from(id), ResourceDraft::new(title, "d", "u"))
    }

    async fn loaded(records: Vec<Resource>) -> (MockRepository, GalleryScreen) {
        let mock = MockRepository::new();
        mock.expect_list().return_ok(records);
        let store = Arc::new(ResourceStore::new(mock.repository(), MutationStrategy::Refetch));
        let screen = GalleryScreen::new(store);
        screen.on_refresh().await.unwrap();
        (mock, screen)
    }

    #[tokio::test]
    async fn test_search_ignores_accents() {
        let (_mock, mut screen) =
            loaded(vec![resource("1", "Diseño web"), resource("2", "Bases de datos")]).await;

        screen.on_search_change("DISENO");
        let titles: Vec<_> = screen.items().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Diseño web"]);

        screen.on_search_change("");
        assert_eq!(screen.items().len(), 2);
    }

    #[tokio::test]
    async fn test_detail_follows_snapshot() {
        let (mock, mut screen) = loaded(vec![resource("1", "A"), resource("2", "B")]).await;

        assert!(screen.open_detail(&ResourceId::from("9")).is_none());
        assert!(screen.detail().is_none());

        let opened = screen.open_detail(&ResourceId::from("2")).unwrap();
        assert_eq!(opened.title, "B");
        assert_eq!(screen.detail().unwrap().title, "B");

        // Record deleted elsewhere: the modal has nothing left to show.
        mock.expect_list().return_ok(vec![resource("1", "A")]);
        screen.on_refresh().await.unwrap();
        assert!(screen.detail().is_none());

        screen.close_detail();
        assert!(screen.detail().is_none());
    }
}
