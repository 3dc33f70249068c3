//! Gallery configuration with environment overrides.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://interview.agileengine.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the photo server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Server base URL; validated when the API client is built.
    pub base_url: String,
    /// API key traded for a bearer token at startup.
    pub api_key: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GalleryConfig {
    /// Build a config from `LUMEN_BASE_URL`, `LUMEN_API_KEY`, and
    /// `LUMEN_TIMEOUT_SECS`, falling back to defaults for anything unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("LUMEN_BASE_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("LUMEN_API_KEY").unwrap_or(defaults.api_key),
            request_timeout: std::env::var("LUMEN_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}
