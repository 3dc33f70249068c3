//! Detail loader: on-demand upgrade of thumbnail-only records.

use std::sync::Arc;

use lumen_model::PhotoId;

use crate::error::ApiError;
use crate::services::PhotoService;
use crate::store::{DetailAdmission, GalleryStore};

/// Outcome of a [`DetailLoader::ensure_detail`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The record was upgraded with the fetched detail.
    Upgraded,
    /// The record had already completed its upgrade; no request was made.
    AlreadyLoaded,
    /// An upgrade for this id was already in flight; no request was made.
    AlreadyFetching,
    /// The fetch succeeded but the id is no longer in the list; the result
    /// was silently discarded (expected under teardown races).
    Discarded,
}

/// Owns the per-photo detail-fetch lifecycle over the gallery store.
#[derive(Clone)]
pub struct DetailLoader {
    store: GalleryStore,
    service: Arc<dyn PhotoService>,
}

impl DetailLoader {
    pub fn new(store: GalleryStore, service: Arc<dyn PhotoService>) -> Self {
        Self { store, service }
    }

    /// Ensure the full detail for a photo is loaded.
    ///
    /// Idempotent: a completed upgrade is never re-fetched and at most one
    /// request per id is ever outstanding. The upgrade is applied to the
    /// record located by id, so list growth while the fetch is in flight
    /// cannot misdirect it. On failure the record stays thumbnail-only and
    /// a later call retries. The in-flight mark is removed on every path.
    pub async fn ensure_detail(&self, id: &PhotoId) -> Result<DetailOutcome, ApiError> {
        match self.store.begin_detail_fetch(id) {
            DetailAdmission::AlreadyLoaded => return Ok(DetailOutcome::AlreadyLoaded),
            DetailAdmission::InFlight => {
                log::trace!("DetailLoader: detail fetch for {id} already in flight");
                return Ok(DetailOutcome::AlreadyFetching);
            }
            DetailAdmission::Admitted => {}
        }

        log::debug!("DetailLoader: fetching detail for {id}");
        match self.service.fetch_detail(id).await {
            Ok(detail) => {
                if self.store.settle_detail(id, Some(&detail)) {
                    Ok(DetailOutcome::Upgraded)
                } else {
                    Ok(DetailOutcome::Discarded)
                }
            }
            Err(err) => {
                self.store.settle_detail(id, None);
                log::warn!("DetailLoader: failed to fetch detail for {id}: {err}");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for DetailLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailLoader")
            .field("store", &self.store)
            .finish()
    }
}
