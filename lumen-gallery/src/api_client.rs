//! HTTP client for the photo server with bearer-token authentication.

use std::sync::Arc;

use async_trait::async_trait;
use lumen_model::{AuthRequest, AuthResponse, PhotoDetail, PhotoId, PhotoPage};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use url::Url;

use crate::config::GalleryConfig;
use crate::error::{ApiError, ApiResult, GalleryError};
use crate::services::PhotoService;

/// API client with authentication support.
///
/// Holds the bearer token obtained from the `POST /auth` exchange and
/// injects it on every request. Cloning shares the token store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token_store: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|token| token.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client from the gallery configuration.
    pub fn new(config: &GalleryConfig) -> Result<Self, GalleryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| GalleryError::InvalidConfig(format!("base URL: {err}")))?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Http)?;

        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Ok(Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    /// Build a full URL from an API path.
    pub fn build_url(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), trimmed)
    }

    /// Set the authentication token.
    pub async fn set_token(&self, token: Option<String>) {
        *self.token_store.write().await = token;
    }

    /// Get the current authentication token.
    pub async fn get_token(&self) -> Option<String> {
        self.token_store.read().await.clone()
    }

    /// Exchange the API key for a bearer token and store it.
    pub async fn authenticate(&self, api_key: &str) -> ApiResult<()> {
        let body = AuthRequest {
            api_key: api_key.to_string(),
        };
        let response = self
            .client
            .post(self.build_url("auth"))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let auth: AuthResponse = response
                    .json()
                    .await
                    .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;
                let token = Self::validate_auth(auth)?;
                self.set_token(Some(token)).await;
                log::info!("[ApiClient] Authenticated with the photo server");
                Ok(())
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            status => Err(Self::status_error(status, response).await),
        }
    }

    /// Extract the bearer token from a handshake response.
    ///
    /// The server signals a rejected key with `auth: false`; an accepted
    /// response without a usable token is treated the same way.
    fn validate_auth(auth: AuthResponse) -> ApiResult<String> {
        if !auth.auth || auth.token.is_empty() {
            return Err(ApiError::Unauthorized);
        }
        Ok(auth.token)
    }

    /// Attach the bearer token, if one is stored.
    async fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.header("Authorization", format!("Bearer {token}"))
        } else {
            builder
        }
    }

    /// Execute an authenticated GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.with_auth(self.client.get(self.build_url(path))).await;
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map_err(|err| ApiError::MalformedResponse(err.to_string())),
            StatusCode::UNAUTHORIZED => {
                // The token expired server-side; drop it so the caller can
                // re-run the handshake.
                self.set_token(None).await;
                Err(ApiError::Unauthorized)
            }
            status => Err(Self::status_error(status, response).await),
        }
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ApiError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

#[async_trait]
impl PhotoService for ApiClient {
    async fn fetch_page(&self, page: u32) -> ApiResult<PhotoPage> {
        self.get_json(&format!("images?page={page}")).await
    }

    async fn fetch_detail(&self, id: &PhotoId) -> ApiResult<PhotoDetail> {
        self.get_json(&format!("images/{id}")).await
    }
}
