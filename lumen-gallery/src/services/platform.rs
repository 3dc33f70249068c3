//! Platform sink traits: clipboard and user-visible notifications.

/// Accepts a URL and performs the platform copy.
///
/// Best-effort by contract: failure is not distinguished from success at
/// this boundary.
pub trait ClipboardSink: Send + Sync {
    fn copy(&self, url: &str);
}

/// Accepts a short message for user-visible confirmation or error display.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Clipboard sink for headless environments.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl ClipboardSink for NoopClipboard {
    fn copy(&self, url: &str) {
        log::debug!("clipboard (noop): {url}");
    }
}

/// Notification sink that routes messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("notification: {message}");
    }
}
