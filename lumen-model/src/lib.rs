//! Core data model definitions shared across Lumen crates.

pub mod error;
pub mod ids;
pub mod photo;
pub mod wire;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::PhotoId;
pub use photo::Photo;
pub use wire::{AuthRequest, AuthResponse, PhotoDetail, PhotoPage, PhotoSummary};
