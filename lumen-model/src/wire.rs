//! Wire DTOs for the photo API.
//!
//! Field names follow the server's JSON payloads: list entries carry a
//! `cropped_picture` thumbnail, detail responses add `full_picture` and
//! extended metadata, and the auth exchange trades an `apiKey` for a bearer
//! token.

use serde::{Deserialize, Serialize};

use crate::ids::PhotoId;

/// One photo entry as returned by the paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSummary {
    pub id: PhotoId,
    pub cropped_picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Full-detail payload for a single photo.
///
/// `cropped_picture` may be omitted by the server; consumers keep the
/// thumbnail they already have in that case. `full_picture` may likewise be
/// absent, in which case the thumbnail stands in for the full image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDetail {
    pub id: PhotoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cropped_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// One page of the photo list.
///
/// `pictures` is the only required field; a payload without it is malformed
/// and the whole page fetch is treated as failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPage {
    pub pictures: Vec<PhotoSummary>,
    #[serde(default)]
    pub page: u32,
    #[serde(default, rename = "pageCount")]
    pub page_count: u32,
    #[serde(default, rename = "hasMore")]
    pub has_more: bool,
}

/// Body of the `POST /auth` token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Response of the `POST /auth` token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub auth: bool,
}
