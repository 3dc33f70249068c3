//! Shared test support: scripted photo service, recording sinks, fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lumen_gallery::error::{ApiError, ApiResult};
use lumen_gallery::services::PhotoService;
use lumen_model::{PhotoDetail, PhotoId, PhotoPage, PhotoSummary};
use parking_lot::Mutex;

/// One scripted response for the mock service.
pub enum Scripted<T> {
    Ok(T),
    /// Simulates a transport-level failure.
    TransportError,
    /// Simulates a syntactically broken payload.
    Malformed,
}

impl<T> Scripted<T> {
    fn into_result(self) -> ApiResult<T> {
        match self {
            Scripted::Ok(value) => Ok(value),
            Scripted::TransportError => Err(ApiError::Status {
                status: 503,
                body: "scripted transport failure".to_string(),
            }),
            Scripted::Malformed => Err(ApiError::MalformedResponse(
                "scripted malformed payload".to_string(),
            )),
        }
    }
}

/// Scripted in-memory photo service that records every call.
///
/// Responses are queued per page number / photo id, so a test can script a
/// failure followed by a success for the same page. An optional delay keeps
/// requests in flight long enough to overlap them with `tokio::join!`.
#[derive(Default)]
pub struct MockPhotoService {
    pages: Mutex<HashMap<u32, VecDeque<Scripted<PhotoPage>>>>,
    details: Mutex<HashMap<String, VecDeque<Scripted<PhotoDetail>>>>,
    page_calls: AtomicUsize,
    detail_calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockPhotoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every request pending for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn script_page(&self, page: u32, response: Scripted<PhotoPage>) {
        self.pages.lock().entry(page).or_default().push_back(response);
    }

    pub fn script_detail(&self, id: &str, response: Scripted<PhotoDetail>) {
        self.details
            .lock()
            .entry(id.to_string())
            .or_default()
            .push_back(response);
    }

    /// Total number of page requests issued against the service.
    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    /// Ids of all detail requests, in arrival order.
    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().clone()
    }
}

#[async_trait]
impl PhotoService for MockPhotoService {
    async fn fetch_page(&self, page: u32) -> ApiResult<PhotoPage> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.pages.lock().get_mut(&page).and_then(VecDeque::pop_front);
        match scripted {
            Some(response) => response.into_result(),
            None => Err(ApiError::Status {
                status: 404,
                body: format!("no scripted response for page {page}"),
            }),
        }
    }

    async fn fetch_detail(&self, id: &PhotoId) -> ApiResult<PhotoDetail> {
        self.detail_calls.lock().push(id.as_str().to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self
            .details
            .lock()
            .get_mut(id.as_str())
            .and_then(VecDeque::pop_front);
        match scripted {
            Some(response) => response.into_result(),
            None => Err(ApiError::Status {
                status: 404,
                body: format!("no scripted response for photo {id}"),
            }),
        }
    }
}

/// Clipboard sink that records every copied URL.
#[derive(Default)]
pub struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().clone()
    }
}

impl lumen_gallery::services::ClipboardSink for RecordingClipboard {
    fn copy(&self, url: &str) {
        self.copied.lock().push(url.to_string());
    }
}

/// Notification sink that records every message.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl lumen_gallery::services::NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

// === Fixture builders ===

pub fn summary(id: &str) -> PhotoSummary {
    PhotoSummary {
        id: PhotoId::new(id).unwrap(),
        cropped_picture: format!("https://x/cropped/{id}.jpg"),
        author: None,
        camera: None,
        tags: None,
    }
}

pub fn page_of(ids: &[&str], has_more: bool) -> PhotoPage {
    PhotoPage {
        pictures: ids.iter().map(|id| summary(id)).collect(),
        page: 0,
        page_count: 0,
        has_more,
    }
}

pub fn detail_of(id: &str, full_url: &str) -> PhotoDetail {
    PhotoDetail {
        id: PhotoId::new(id).unwrap(),
        cropped_picture: None,
        full_picture: Some(full_url.to_string()),
        author: Some("Test Author".to_string()),
        camera: Some("Test Camera".to_string()),
        tags: Some("#test".to_string()),
    }
}

pub fn photo_id(id: &str) -> PhotoId {
    PhotoId::new(id).unwrap()
}

pub fn service(mock: MockPhotoService) -> Arc<MockPhotoService> {
    Arc::new(mock)
}
