use crate::error::ModelError;

/// Strongly typed ID for photos.
///
/// Photo ids are opaque strings assigned by the server; they are the source
/// of truth for deduplication across pages.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    /// Create a validated photo id. Empty ids are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ModelError::InvalidId(
                "photo id cannot be empty".to_string(),
            ));
        }
        Ok(PhotoId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhotoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
