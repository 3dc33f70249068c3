//! Pagination engine: incremental page-by-page loading of the photo list.

use std::sync::Arc;

use crate::error::ApiError;
use crate::services::PhotoService;
use crate::store::GalleryStore;

/// Outcome of a [`Paginator::load_next_page`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// The page was fetched and merged; `appended` photos were new.
    Loaded { appended: usize },
    /// A page fetch was already outstanding; no request was made.
    AlreadyFetching,
}

/// Owns the page-fetch lifecycle over the gallery store.
#[derive(Clone)]
pub struct Paginator {
    store: GalleryStore,
    service: Arc<dyn PhotoService>,
}

impl Paginator {
    pub fn new(store: GalleryStore, service: Arc<dyn PhotoService>) -> Self {
        Self { store, service }
    }

    /// Load the next page of the photo list.
    ///
    /// Overlapping calls are the central hazard of infinite scroll: while a
    /// request is outstanding every further call is a no-op that issues
    /// zero network requests. On success the page is merged by id (existing
    /// ids skipped, arrival order preserved) and the page cursor advances.
    /// On failure the list and cursor are left unchanged so the next
    /// scroll-edge signal retries the same page. The fetching flag is
    /// cleared on every path.
    pub async fn load_next_page(&self) -> Result<PageLoad, ApiError> {
        let Some(page) = self.store.begin_page_fetch() else {
            log::trace!("Paginator: page fetch already in flight, ignoring trigger");
            return Ok(PageLoad::AlreadyFetching);
        };

        log::debug!("Paginator: fetching page {page}");
        match self.service.fetch_page(page).await {
            Ok(response) => {
                let appended = self.store.commit_page(response.pictures);
                self.store.finish_page_fetch();
                log::debug!(
                    "Paginator: page {page} merged, {appended} new photos, {} total",
                    self.store.len()
                );
                Ok(PageLoad::Loaded { appended })
            }
            Err(err) => {
                self.store.finish_page_fetch();
                log::warn!("Paginator: failed to fetch page {page}: {err}");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("store", &self.store)
            .finish()
    }
}
