//! Service traits consumed by the gallery engines.
//!
//! These are the seams to the outside world: the photo server, the platform
//! clipboard, and the notification display. Mock implementations live with
//! the integration tests.

pub mod api;
pub mod platform;

pub use api::PhotoService;
pub use platform::{ClipboardSink, LogNotifier, NoopClipboard, NotificationSink};
