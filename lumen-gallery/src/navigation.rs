//! Navigation cursor: a bounded index over the growing photo list.
//!
//! Saturating rather than wrapping avoids surprising jumps past the end of
//! a still-growing, lazily paginated list, and the cursor never triggers a
//! page fetch itself; that trigger belongs to the scroll-edge collaborator.

use crate::store::GalleryStore;

/// Bounded cursor over the gallery store's photo list.
#[derive(Debug, Clone)]
pub struct NavigationCursor {
    store: GalleryStore,
}

impl NavigationCursor {
    pub fn new(store: GalleryStore) -> Self {
        Self { store }
    }

    /// Move to the next photo, saturating at the last index.
    ///
    /// Returns the new index when the cursor moved, None otherwise.
    pub fn advance(&self) -> Option<usize> {
        self.store.advance_index()
    }

    /// Move to the previous photo, saturating at index zero.
    ///
    /// Returns the new index when the cursor moved, None otherwise.
    pub fn retreat(&self) -> Option<usize> {
        self.store.retreat_index()
    }

    /// Jump to a specific index.
    ///
    /// Accepted only when the index is within the current list bounds;
    /// out-of-range requests are rejected with the state unchanged. Returns
    /// the index when accepted, which doubles as the focus-change
    /// notification even when the cursor was already there.
    pub fn jump_to(&self, index: usize) -> Option<usize> {
        self.store.jump_index(index)
    }
}
