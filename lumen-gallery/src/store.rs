//! GalleryStore - Single source of truth for gallery state
//!
//! This module owns the ordered photo list, the page cursor, the in-flight
//! fetch flags, and the navigation index. All mutation goes through the
//! engine operations, which keeps the no-duplicate-fetch and
//! at-most-one-upgrade invariants enforceable by local checks.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lumen_model::{Photo, PhotoDetail, PhotoId, PhotoSummary};
use parking_lot::RwLock;

/// Composed gallery state behind the store handle.
struct GalleryState {
    /// Ordered photo list, insertion order = arrival order across pages.
    photos: Vec<Photo>,

    /// Index by id for O(1) dedup and id-based record lookup.
    by_id: HashMap<PhotoId, usize>,

    /// Next page number to request, 1-based. Only ever incremented, and
    /// only after a successful page fetch.
    current_page: u32,

    /// True for the entire span of an outstanding page request.
    fetching_page: bool,

    /// Ids currently being upgraded; at most one in-flight fetch per id.
    fetching_detail_for: HashSet<PhotoId>,

    /// Currently displayed index; None until photos exist.
    current_index: Option<usize>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            by_id: HashMap::new(),
            current_page: 1,
            fetching_page: false,
            fetching_detail_for: HashSet::new(),
            current_index: None,
        }
    }
}

/// Admission decision for a detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailAdmission {
    /// The record already completed its upgrade; nothing to fetch.
    AlreadyLoaded,
    /// An upgrade for this id is already in flight.
    InFlight,
    /// The id was marked in-flight; the caller owns the fetch.
    Admitted,
}

/// Cloneable handle to the gallery state.
///
/// Engines take the lock only for synchronous check/mutate sections and
/// never hold it across an await point.
#[derive(Clone, Default)]
pub struct GalleryStore {
    inner: Arc<RwLock<GalleryState>>,
}

impl GalleryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole state with a freshly constructed default.
    ///
    /// Late-arriving detail upgrades against the reset state fail their id
    /// lookup and are silently discarded.
    pub fn reset(&self) {
        *self.inner.write() = GalleryState::default();
    }

    // === Read access ===

    /// Snapshot of the photo list for rendering.
    pub fn photos(&self) -> Vec<Photo> {
        self.inner.read().photos.clone()
    }

    /// Total count of loaded photos.
    pub fn len(&self) -> usize {
        self.inner.read().photos.len()
    }

    /// Check if any photos are loaded.
    pub fn is_empty(&self) -> bool {
        self.inner.read().photos.is_empty()
    }

    /// Look up a photo by id.
    pub fn get(&self, id: &PhotoId) -> Option<Photo> {
        let state = self.inner.read();
        state.by_id.get(id).map(|&pos| state.photos[pos].clone())
    }

    /// Look up a photo by list position.
    pub fn photo_at(&self, index: usize) -> Option<Photo> {
        self.inner.read().photos.get(index).cloned()
    }

    /// Next page number to request, 1-based.
    pub fn current_page(&self) -> u32 {
        self.inner.read().current_page
    }

    /// True while a page request is outstanding.
    pub fn is_fetching_page(&self) -> bool {
        self.inner.read().fetching_page
    }

    /// True while a detail upgrade for this id is outstanding.
    pub fn is_fetching_detail(&self, id: &PhotoId) -> bool {
        self.inner.read().fetching_detail_for.contains(id)
    }

    /// Currently displayed index, None until photos exist.
    pub fn current_index(&self) -> Option<usize> {
        self.inner.read().current_index
    }

    /// The photo at the current index, if any.
    pub fn focused(&self) -> Option<Photo> {
        let state = self.inner.read();
        state
            .current_index
            .and_then(|pos| state.photos.get(pos).cloned())
    }

    // === Page-fetch lifecycle (used by the pagination engine) ===

    /// Mark a page fetch as started and return the page number to request.
    ///
    /// Returns None when a fetch is already outstanding; the caller must
    /// then make zero network calls.
    pub(crate) fn begin_page_fetch(&self) -> Option<u32> {
        let mut state = self.inner.write();
        if state.fetching_page {
            return None;
        }
        state.fetching_page = true;
        Some(state.current_page)
    }

    /// Merge a successful page into the list and advance the page cursor.
    ///
    /// Ids already present are skipped so a server that repeats a photo
    /// across pages never produces a duplicate record or regresses an
    /// upgraded one. Returns the number of newly appended photos.
    pub(crate) fn commit_page(&self, summaries: Vec<PhotoSummary>) -> usize {
        let mut state = self.inner.write();
        let mut appended = 0;
        for summary in summaries {
            if state.by_id.contains_key(&summary.id) {
                log::trace!("GalleryStore: skipping duplicate photo {}", summary.id);
                continue;
            }
            let photo = Photo::from_summary(summary);
            let pos = state.photos.len();
            state.by_id.insert(photo.id.clone(), pos);
            state.photos.push(photo);
            appended += 1;
        }
        state.current_page += 1;
        if state.current_index.is_none() && !state.photos.is_empty() {
            state.current_index = Some(0);
        }
        appended
    }

    /// Clear the page-fetch flag. Called on every settle path.
    pub(crate) fn finish_page_fetch(&self) {
        self.inner.write().fetching_page = false;
    }

    // === Detail-fetch lifecycle (used by the detail loader) ===

    /// Decide whether a detail fetch for this id may start.
    pub(crate) fn begin_detail_fetch(&self, id: &PhotoId) -> DetailAdmission {
        let mut state = self.inner.write();
        let already_loaded = state
            .by_id
            .get(id)
            .is_some_and(|&pos| state.photos[pos].detail_loaded);
        if already_loaded {
            return DetailAdmission::AlreadyLoaded;
        }
        if state.fetching_detail_for.contains(id) {
            return DetailAdmission::InFlight;
        }
        state.fetching_detail_for.insert(id.clone());
        DetailAdmission::Admitted
    }

    /// Settle a detail fetch: remove the in-flight mark and, on success,
    /// apply the upgrade to the record located by id.
    ///
    /// Removal and application happen in one lock section so an id is never
    /// observable as both in flight and loaded. Returns false when the
    /// upgrade was discarded because the id is no longer present.
    pub(crate) fn settle_detail(&self, id: &PhotoId, detail: Option<&PhotoDetail>) -> bool {
        let mut state = self.inner.write();
        state.fetching_detail_for.remove(id);
        let Some(detail) = detail else {
            return false;
        };
        // Lookup by id, never by index: concurrent page growth can shift
        // positions while the fetch was in flight.
        match state.by_id.get(id).copied() {
            Some(pos) => {
                state.photos[pos].apply_detail(detail);
                true
            }
            None => {
                log::debug!("GalleryStore: discarding detail for unknown photo {id}");
                false
            }
        }
    }

    // === Navigation (used by the navigation cursor) ===

    /// Move the index forward, saturating at the last photo.
    pub(crate) fn advance_index(&self) -> Option<usize> {
        let mut state = self.inner.write();
        let len = state.photos.len();
        if len == 0 {
            return None;
        }
        let next = match state.current_index {
            Some(current) => (current + 1).min(len - 1),
            None => 0,
        };
        if state.current_index == Some(next) {
            return None;
        }
        state.current_index = Some(next);
        Some(next)
    }

    /// Move the index backward, saturating at zero.
    pub(crate) fn retreat_index(&self) -> Option<usize> {
        let mut state = self.inner.write();
        if state.photos.is_empty() {
            return None;
        }
        let next = match state.current_index {
            Some(current) => current.saturating_sub(1),
            None => 0,
        };
        if state.current_index == Some(next) {
            return None;
        }
        state.current_index = Some(next);
        Some(next)
    }

    /// Set the index directly; rejected when out of bounds.
    pub(crate) fn jump_index(&self, index: usize) -> Option<usize> {
        let mut state = self.inner.write();
        if index >= state.photos.len() {
            return None;
        }
        state.current_index = Some(index);
        Some(index)
    }
}

impl std::fmt::Debug for GalleryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read();
        f.debug_struct("GalleryStore")
            .field("photo_count", &state.photos.len())
            .field("current_page", &state.current_page)
            .field("fetching_page", &state.fetching_page)
            .field("details_in_flight", &state.fetching_detail_for.len())
            .field("current_index", &state.current_index)
            .finish()
    }
}
