//! Photo service trait: the gallery's view of the remote collection.

use async_trait::async_trait;
use lumen_model::{PhotoDetail, PhotoId, PhotoPage};

use crate::error::ApiResult;

/// Abstraction over the photo server.
///
/// The engines only ever issue these two calls; transport, authentication,
/// and wire format live behind the implementation
/// ([`crate::api_client::ApiClient`] in production, scripted mocks in
/// tests).
#[async_trait]
pub trait PhotoService: Send + Sync {
    /// Fetch one page of photo summaries, 1-based.
    async fn fetch_page(&self, page: u32) -> ApiResult<PhotoPage>;

    /// Fetch the full detail for a single photo.
    async fn fetch_detail(&self, id: &PhotoId) -> ApiResult<PhotoDetail>;
}
