//! The list view-model: filter, then optionally paginate, the store snapshot.

use crate::model::Resource;
use crate::view_model::{Paginator, SearchNormalization};

/// Page position of a projected list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based page being shown (clamped to the pages that exist).
    pub page: usize,
    /// 0 when nothing matches.
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// What a screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<Resource>,
    /// Matches before pagination.
    pub total_matches: usize,
    /// `None` for unpaginated lists.
    pub pagination: Option<PageInfo>,
}

/// Search term plus page cursor; everything else is derived from the snapshot
/// on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    search: String,
    normalization: SearchNormalization,
    paginator: Option<Paginator>,
}

impl ListViewModel {
    pub fn new(normalization: SearchNormalization, paginator: Option<Paginator>) -> Self {
        Self {
            search: String::new(),
            normalization,
            paginator,
        }
    }

    /// Accent-insensitive and unpaginated, as the gallery shows it.
    pub fn gallery() -> Self {
        Self::new(SearchNormalization::AccentInsensitive, None)
    }

    /// Lowercase-only matching, `page_size` records per page.
    pub fn paginated(page_size: usize) -> Self {
        Self::new(SearchNormalization::Lowercase, Some(Paginator::new(page_size)))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn normalization(&self) -> SearchNormalization {
        self.normalization
    }

    /// Current cursor, if paginated.
    pub fn page(&self) -> Option<usize> {
        self.paginator.as_ref().map(Paginator::page)
    }

    /// Sets the search term and moves back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        if let Some(paginator) = self.paginator.as_mut() {
            paginator.reset();
        }
    }

    /// Records whose title contains the search term, in snapshot order.
    pub fn filter<'a>(&self, snapshot: &'a [Resource]) -> Vec<&'a Resource> {
        let query = self.normalization.normalize(&self.search);
        snapshot
            .iter()
            .filter(|r| self.normalization.normalize(&r.title).contains(&query))
            .collect()
    }

    pub fn project(&self, snapshot: &[Resource]) -> ListPage {
        let matches = self.filter(snapshot);
        let total_matches = matches.len();

        match &self.paginator {
            None => ListPage {
                items: matches.into_iter().cloned().collect(),
                total_matches,
                pagination: None,
            },
            Some(paginator) => {
                let page = paginator.effective_page(total_matches);
                let total_pages = paginator.total_pages(total_matches);
                ListPage {
                    items: matches[paginator.range(total_matches)]
                        .iter()
                        .map(|r| (*r).clone())
                        .collect(),
                    total_matches,
                    pagination: Some(PageInfo {
                        page,
                        total_pages,
                        has_next: page < total_pages,
                        has_previous: page > 1,
                    }),
                }
            }
        }
    }

    /// Moves to the next page if there is one. Unpaginated lists never move.
    pub fn next_page(&mut self, snapshot: &[Resource]) -> bool {
        let count = self.filter(snapshot).len();
        match self.paginator.as_mut() {
            Some(paginator) => {
                paginator.clamp(count);
                paginator.next(count)
            }
            None => false,
        }
    }

    /// Moves to the previous page unless on page 1.
    pub fn previous_page(&mut self, snapshot: &[Resource]) -> bool {
        let count = self.filter(snapshot).len();
        match self.paginator.as_mut() {
            Some(paginator) => {
                paginator.clamp(count);
                paginator.previous()
            }
            None => false,
        }
    }

    /// Pulls a stale cursor back onto the last existing page. Call whenever the
    /// snapshot may have shrunk, so a later growth does not jump pages.
    pub fn clamp_page(&mut self, snapshot: &[Resource]) {
        let count = self.filter(snapshot).len();
        if let Some(paginator) = self.paginator.as_mut() {
            paginator.clamp(count);
        }
    }
}
