//! Gallery controller: composition root over the three engines.
//!
//! The controller holds no state of its own; it wires the platform's events
//! (mount, scroll edge, viewer clicks, keyboard navigation, share) to the
//! pagination engine, the detail loader, and the navigation cursor, and
//! surfaces failures through the notification sink.

use std::sync::Arc;

use crate::detail::DetailLoader;
use crate::navigation::NavigationCursor;
use crate::pagination::Paginator;
use crate::services::{ClipboardSink, NotificationSink, PhotoService};
use crate::store::GalleryStore;

/// Shown when a page fetch fails; the next scroll-edge signal retries.
pub const PAGE_FETCH_FAILED: &str = "An error has occurred while trying to fetch the images";

/// Shown when a detail fetch fails; re-focusing the photo retries.
pub const DETAIL_FETCH_FAILED: &str = "An error has occurred while fetching the photo detail";

/// Confirmation for the share action.
pub const URL_COPIED: &str = "The photo URL was copied to the clipboard";

/// Composition root for one gallery session.
pub struct GalleryController {
    store: GalleryStore,
    paginator: Paginator,
    details: DetailLoader,
    cursor: NavigationCursor,
    clipboard: Arc<dyn ClipboardSink>,
    notifier: Arc<dyn NotificationSink>,
}

impl GalleryController {
    pub fn new(
        service: Arc<dyn PhotoService>,
        clipboard: Arc<dyn ClipboardSink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let store = GalleryStore::new();
        Self {
            paginator: Paginator::new(store.clone(), service.clone()),
            details: DetailLoader::new(store.clone(), service),
            cursor: NavigationCursor::new(store.clone()),
            store,
            clipboard,
            notifier,
        }
    }

    /// Handle on the composed state, for rendering.
    pub fn store(&self) -> &GalleryStore {
        &self.store
    }

    /// Called once when the gallery is shown; loads the first page.
    pub async fn mount(&self) {
        self.request_next_page().await;
    }

    /// Called each time the viewport nears the end of the rendered list.
    ///
    /// Redundant signals while a fetch is outstanding are safe: the
    /// pagination engine turns them into no-ops.
    pub async fn on_scroll_edge(&self) {
        self.request_next_page().await;
    }

    /// Open the detail viewer on the photo at `index`.
    pub async fn open_viewer(&self, index: usize) {
        if let Some(focused) = self.cursor.jump_to(index) {
            self.focus_changed(focused).await;
        }
    }

    /// Move the viewer to the next photo (right arrow / next button).
    pub async fn advance(&self) {
        if let Some(focused) = self.cursor.advance() {
            self.focus_changed(focused).await;
        }
    }

    /// Move the viewer to the previous photo (left arrow / previous button).
    pub async fn retreat(&self) {
        if let Some(focused) = self.cursor.retreat() {
            self.focus_changed(focused).await;
        }
    }

    /// Copy the focused photo's best available URL to the clipboard.
    pub fn share_focused(&self) {
        let Some(photo) = self.store.focused() else {
            return;
        };
        self.clipboard.copy(photo.best_url());
        self.notifier.notify(URL_COPIED);
    }

    /// Discard the session state; safe to call with fetches still in
    /// flight, their late results are discarded by the id lookup.
    pub fn teardown(&self) {
        self.store.reset();
    }

    async fn request_next_page(&self) {
        if self.paginator.load_next_page().await.is_err() {
            self.notifier.notify(PAGE_FETCH_FAILED);
        }
    }

    async fn focus_changed(&self, index: usize) {
        let Some(photo) = self.store.photo_at(index) else {
            return;
        };
        if self.details.ensure_detail(&photo.id).await.is_err() {
            self.notifier.notify(DETAIL_FETCH_FAILED);
        }
    }
}

impl std::fmt::Debug for GalleryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryController")
            .field("store", &self.store)
            .finish()
    }
}
