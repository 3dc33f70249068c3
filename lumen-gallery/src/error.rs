//! Error types for gallery operations.

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from the photo API boundary.
///
/// Both the transport failure and the malformed-payload case are recoverable:
/// the engines leave their state untouched so the next trigger retries.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unauthorized - token missing or expired")]
    Unauthorized,

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Top-level errors for gallery setup and operation.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
