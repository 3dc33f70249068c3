//! Lumen gallery engine.
//!
//! This crate coordinates three pieces of state over a remote photo
//! collection: incremental page-by-page loading of the photo list, on-demand
//! upgrade of thumbnail-only records to full detail, and a bounded
//! navigation cursor that stays consistent while the list grows. The
//! [`controller::GalleryController`] composes the three engines and is the
//! only entry point the platform event layer needs.
//!
//! Rendering, scroll-edge detection, clipboard access, and notification
//! display are external collaborators consumed through the traits in
//! [`services`].

pub mod api_client;
pub mod config;
pub mod controller;
pub mod detail;
pub mod error;
pub mod navigation;
pub mod pagination;
pub mod services;
pub mod store;

pub use api_client::ApiClient;
pub use config::GalleryConfig;
pub use controller::GalleryController;
pub use detail::{DetailLoader, DetailOutcome};
pub use error::{ApiError, ApiResult, GalleryError};
pub use navigation::NavigationCursor;
pub use pagination::{PageLoad, Paginator};
pub use services::{ClipboardSink, NotificationSink, PhotoService};
pub use store::GalleryStore;
