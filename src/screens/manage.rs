//! The CRUD management screen: plain search, pages of five, the add/edit form,
//! delete, and lookup by id.

use crate::clients::TransportError;
use crate::form::{
    Field, FormError, FormFields, FormMode, RequiredFields, ResourceForm, SubmitOutcome,
};
use crate::model::{Resource, ResourceId};
use crate::store::ResourceStore;
use crate::view_model::{ListViewModel, PageInfo, PAGE_SIZE};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Next,
    Previous,
}

/// Everything the shell needs to draw the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ManageView {
    pub search: String,
    pub items: Vec<Resource>,
    pub total_matches: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    /// A lookup by id is pinned in place of the list.
    pub lookup_active: bool,
    pub mode: FormMode,
    pub fields: FormFields,
}

pub struct ManageScreen {
    store: Arc<ResourceStore>,
    list: ListViewModel,
    form: ResourceForm,
    lookup: Option<Resource>,
}

impl ManageScreen {
    /// The management screen as shipped: source is a required field.
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self::with_required(store, RequiredFields::WithSource)
    }

    pub fn with_required(store: Arc<ResourceStore>, required: RequiredFields) -> Self {
        Self {
            store,
            list: ListViewModel::paginated(PAGE_SIZE),
            form: ResourceForm::new(required),
            lookup: None,
        }
    }

    pub fn store(&self) -> &Arc<ResourceStore> {
        &self.store
    }

    pub fn form(&self) -> &ResourceForm {
        &self.form
    }

    /// Render-ready state. Also pulls a stale page cursor back into range when
    /// the shared snapshot shrank since the last call.
    pub fn view(&mut self) -> ManageView {
        self.sync_page();
        let (items, total_matches, page, total_pages, has_next, has_previous) = match &self.lookup
        {
            Some(found) => (vec![found.clone()], 1, 1, 1, false, false),
            None => {
                let projected = self.list.project(&self.store.snapshot());
                let info = projected.pagination.unwrap_or(PageInfo {
                    page: 1,
                    total_pages: 0,
                    has_next: false,
                    has_previous: false,
                });
                (
                    projected.items,
                    projected.total_matches,
                    info.page,
                    info.total_pages,
                    info.has_next,
                    info.has_previous,
                )
            }
        };

        ManageView {
            search: self.list.search().to_string(),
            items,
            total_matches,
            page,
            total_pages,
            has_next,
            has_previous,
            lookup_active: self.lookup.is_some(),
            mode: self.form.mode().clone(),
            fields: self.form.fields().clone(),
        }
    }

    // --- List handlers ---

    pub fn on_search_change(&mut self, search: impl Into<String>) {
        self.list.set_search(search);
    }

    /// Returns whether the page moved. Disabled buttons map to `false`.
    pub fn on_page_change(&mut self, change: PageChange) -> bool {
        let snapshot = self.store.snapshot();
        let moved = match change {
            PageChange::Next => self.list.next_page(&snapshot),
            PageChange::Previous => self.list.previous_page(&snapshot),
        };
        debug!(?change, moved, page = ?self.list.page(), "Page change");
        moved
    }

    pub fn on_next_page(&mut self) -> bool {
        self.on_page_change(PageChange::Next)
    }

    pub fn on_previous_page(&mut self) -> bool {
        self.on_page_change(PageChange::Previous)
    }

    /// Reloads the full list, dropping any pinned lookup.
    pub async fn on_refresh(&mut self) -> Result<usize, TransportError> {
        let size = self.store.refresh().await?;
        self.show_full_list();
        Ok(size)
    }

    /// Deletes through the store and goes back to the full list. The form is
    /// left as it is, even when it is editing the deleted record.
    #[instrument(skip(self))]
    pub async fn on_delete(&mut self, id: &ResourceId) -> Result<(), TransportError> {
        self.store.delete(id).await?;
        self.show_full_list();
        if self.form.is_editing(id) {
            info!(%id, "Deleted record is still loaded in the form");
        }
        Ok(())
    }

    /// Fetches one record by id and shows only it until [`clear_lookup`](Self::clear_lookup)
    /// or the next refresh or mutation. A blank id is ignored: `Ok(None)`, no
    /// request, view unchanged.
    #[instrument(skip(self))]
    pub async fn on_lookup_by_id(
        &mut self,
        id: &ResourceId,
    ) -> Result<Option<Resource>, TransportError> {
        if id.as_str().trim().is_empty() {
            debug!("Blank id; lookup skipped");
            return Ok(None);
        }
        let found = self.store.get(id).await?;
        self.lookup = Some(found.clone());
        Ok(Some(found))
    }

    pub fn clear_lookup(&mut self) {
        self.lookup = None;
    }

    fn show_full_list(&mut self) {
        self.lookup = None;
        self.sync_page();
    }

    fn sync_page(&mut self) {
        let snapshot = self.store.snapshot();
        self.list.clamp_page(&snapshot);
    }

    // --- Form handlers ---

    /// Loads a listed record into the form. Returns `false` if `id` is not
    /// currently shown.
    pub fn on_select_for_edit(&mut self, id: &ResourceId) -> bool {
        let snapshot = self.store.snapshot();
        let target = self
            .lookup
            .iter()
            .chain(snapshot.iter())
            .find(|r| &r.id == id);
        match target {
            Some(resource) => {
                self.form.select_for_edit(resource);
                true
            }
            None => false,
        }
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submits the form; on success the full list replaces any pinned lookup.
    pub async fn on_submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let outcome = self.form.submit(&self.store).await?;
        self.show_full_list();
        Ok(outcome)
    }

    pub fn on_cancel(&mut self) {
        self.form.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{MockRepository, RecordedCall};
    use crate::model::ResourceDraft;
    use crate::store::MutationStrategy;

    fn resources(n: u32) -> Vec<Resource> {
        (1..=n)
            .map(|i| {
                Resource::from_draft(
                    ResourceId::from(i),
                    ResourceDraft::new(format!("Topic {}", i), "d", "u").with_source("s"),
                )
            })
            .collect()
    }

    async fn loaded(records: Vec<Resource>) -> (MockRepository, ManageScreen) {
        let mock = MockRepository::new();
        mock.expect_list().return_ok(records);
        let store = Arc::new(ResourceStore::new(mock.repository(), MutationStrategy::Refetch));
        let mut screen = ManageScreen::new(store);
        screen.on_refresh().await.unwrap();
        (mock, screen)
    }

    #[tokio::test]
    async fn test_view_pages_through_list() {
        let (_mock, mut screen) = loaded(resources(11)).await;

        let view = screen.view();
        assert_eq!(view.items.len(), 5);
        assert_eq!((view.page, view.total_pages), (1, 3));
        assert!(!screen.on_previous_page());

        assert!(screen.on_next_page());
        assert!(screen.on_next_page());
        assert!(!screen.on_next_page());
        let view = screen.view();
        assert_eq!(view.items.len(), 1);
        assert!(view.has_previous && !view.has_next);

        screen.on_search_change("topic 1");
        let view = screen.view();
        assert_eq!(view.page, 1);
        // "Topic 1", "Topic 10", "Topic 11"
        assert_eq!(view.total_matches, 3);
    }

    #[tokio::test]
    async fn test_lookup_pins_single_record() {
        let (mock, mut screen) = loaded(resources(6)).await;
        let wanted = resources(6).remove(3);
        mock.expect_get("4").return_ok(wanted.clone());

        screen.on_lookup_by_id(&ResourceId::from("4")).await.unwrap();
        let view = screen.view();
        assert!(view.lookup_active);
        assert_eq!(view.items, vec![wanted]);

        screen.clear_lookup();
        assert_eq!(screen.view().items.len(), 5);
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_of_looked_up_record_shows_fresh_list() {
        let old = Resource::from_draft(
            ResourceId::from("1"),
            ResourceDraft::new("Old", "d", "u").with_source("s"),
        );
        let other = Resource::from_draft(
            ResourceId::from("2"),
            ResourceDraft::new("B", "d", "u").with_source("s"),
        );
        let (mock, mut screen) = loaded(vec![old.clone(), other.clone()]).await;
        let new = Resource {
            title: "New".into(),
            ..old.clone()
        };
        mock.expect_get("1").return_ok(old);
        mock.expect_update("1").return_ok(new.clone());
        mock.expect_list().return_ok(vec![new.clone(), other.clone()]);

        screen.on_lookup_by_id(&ResourceId::from("1")).await.unwrap();
        assert!(screen.on_select_for_edit(&ResourceId::from("1")));
        screen.on_field_change(Field::Title, "New");
        screen.on_submit().await.unwrap();

        let view = screen.view();
        assert!(!view.lookup_active);
        assert_eq!(view.items, vec![new, other]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_refresh_drops_lookup() {
        let (mock, mut screen) = loaded(resources(3)).await;
        mock.expect_get("2").return_ok(resources(3).remove(1));
        mock.expect_list().return_ok(resources(3));

        screen.on_lookup_by_id(&ResourceId::from("2")).await.unwrap();
        assert!(screen.view().lookup_active);
        screen.on_refresh().await.unwrap();

        let view = screen.view();
        assert!(!view.lookup_active);
        assert_eq!(view.items.len(), 3);
    }

    #[tokio::test]
    async fn test_blank_lookup_sends_nothing() {
        let (mock, mut screen) = loaded(resources(2)).await;

        assert_eq!(screen.on_lookup_by_id(&ResourceId::from("")).await.unwrap(), None);
        assert_eq!(screen.on_lookup_by_id(&ResourceId::from("  ")).await.unwrap(), None);

        assert_eq!(mock.calls(), vec![RecordedCall::List]);
        assert!(!screen.view().lookup_active);
        assert_eq!(screen.view().items.len(), 2);
    }

    #[tokio::test]
    async fn test_page_stays_clamped_after_list_regrows() {
        let (mock, mut screen) = loaded(resources(11)).await;
        assert!(screen.on_next_page());
        assert!(screen.on_next_page());

        // Another screen shrinks the shared collection.
        mock.expect_list().return_ok(resources(6));
        screen.store().refresh().await.unwrap();
        assert_eq!(screen.view().page, 2);

        mock.expect_list().return_ok(resources(11));
        screen.store().refresh().await.unwrap();
        let view = screen.view();
        assert_eq!((view.page, view.total_pages), (2, 3));
        assert_eq!(view.items[0].title, "Topic 6");
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_list() {
        let (mock, mut screen) = loaded(resources(2)).await;
        mock.expect_get("99").return_err(TransportError::not_found("99"));

        assert!(screen.on_lookup_by_id(&ResourceId::from("99")).await.is_err());
        assert!(!screen.view().lookup_active);
        assert_eq!(screen.view().items.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_leaves_form_untouched() {
        let (mock, mut screen) = loaded(resources(3)).await;
        mock.expect_delete("2").return_ok(());
        let mut remaining = resources(3);
        remaining.remove(1);
        mock.expect_list().return_ok(remaining);

        assert!(screen.on_select_for_edit(&ResourceId::from("2")));
        screen.on_delete(&ResourceId::from("2")).await.unwrap();

        assert_eq!(screen.view().items.len(), 2);
        assert_eq!(screen.view().mode, FormMode::Editing(ResourceId::from("2")));
        assert_eq!(screen.view().fields.title, "Topic 2");
        mock.verify();
    }

    #[tokio::test]
    async fn test_select_unknown_id_is_ignored() {
        let (_mock, mut screen) = loaded(resources(1)).await;
        assert!(!screen.on_select_for_edit(&ResourceId::from("7")));
        assert_eq!(screen.view().mode, FormMode::Create);
    }
}
