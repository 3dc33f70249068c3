//! The in-memory photo record.

use crate::ids::PhotoId;
use crate::wire::{PhotoDetail, PhotoSummary};

/// A photo known to the gallery.
///
/// Records start thumbnail-only when they arrive on a list page and are
/// upgraded in place exactly once when the detail payload for their id is
/// applied. Display strings are derived at read time rather than cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub thumbnail_url: String,
    pub full_url: Option<String>,
    pub author: Option<String>,
    pub camera: Option<String>,
    pub tags: Option<String>,
    pub detail_loaded: bool,
}

impl Photo {
    /// Build a thumbnail-only record from a list-page entry.
    pub fn from_summary(summary: PhotoSummary) -> Self {
        Photo {
            id: summary.id,
            thumbnail_url: summary.cropped_picture,
            full_url: None,
            author: summary.author,
            camera: summary.camera,
            tags: summary.tags,
            detail_loaded: false,
        }
    }

    /// Apply a detail payload to this record.
    ///
    /// The thumbnail is preserved when the detail omits it, and the full URL
    /// falls back to the thumbnail when the payload has no full-resolution
    /// field. Applying the same payload twice leaves the record unchanged.
    pub fn apply_detail(&mut self, detail: &PhotoDetail) {
        if let Some(thumbnail) = &detail.cropped_picture {
            self.thumbnail_url = thumbnail.clone();
        }
        self.full_url = Some(
            detail
                .full_picture
                .clone()
                .unwrap_or_else(|| self.thumbnail_url.clone()),
        );
        if detail.author.is_some() {
            self.author = detail.author.clone();
        }
        if detail.camera.is_some() {
            self.camera = detail.camera.clone();
        }
        if detail.tags.is_some() {
            self.tags = detail.tags.clone();
        }
        self.detail_loaded = true;
    }

    /// Display title, empty until the author is known.
    pub fn title(&self) -> String {
        self.author.clone().unwrap_or_default()
    }

    /// Display description derived from camera and tags.
    pub fn description(&self) -> String {
        match (self.camera.as_deref(), self.tags.as_deref()) {
            (Some(camera), Some(tags)) => format!("{camera} {tags}"),
            (Some(camera), None) => camera.to_string(),
            (None, Some(tags)) => tags.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Best available URL for sharing: full resolution if loaded, otherwise
    /// the thumbnail.
    pub fn best_url(&self) -> &str {
        self.full_url.as_deref().unwrap_or(&self.thumbnail_url)
    }
}
