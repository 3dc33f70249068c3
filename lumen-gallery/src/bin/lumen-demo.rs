//! Headless gallery session against a live photo server.
//!
//! Stands in for the platform event layer: mounts the gallery, pages
//! through the list, opens the viewer on the first photo, walks a few
//! steps, and fires the share action.

use std::sync::Arc;

use env_logger::{Builder, Target};
use log::LevelFilter;
use lumen_gallery::services::{LogNotifier, NoopClipboard};
use lumen_gallery::{ApiClient, GalleryConfig, GalleryController};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("lumen_gallery", LevelFilter::Info)
        .filter_module("lumen_demo", LevelFilter::Info)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = GalleryConfig::from_env();
    let client = ApiClient::new(&config)?;
    client.authenticate(&config.api_key).await?;

    let controller = GalleryController::new(
        Arc::new(client),
        Arc::new(NoopClipboard),
        Arc::new(LogNotifier),
    );

    controller.mount().await;
    log::info!(
        "mounted: {} photos, next page {}",
        controller.store().len(),
        controller.store().current_page()
    );

    // Simulate a couple of scroll-edge signals.
    for _ in 0..2 {
        controller.on_scroll_edge().await;
    }
    log::info!(
        "after scrolling: {} photos, next page {}",
        controller.store().len(),
        controller.store().current_page()
    );

    if controller.store().is_empty() {
        log::warn!("no photos loaded, nothing to view");
        return Ok(());
    }

    // Open the viewer and walk a few photos to exercise the detail cache.
    controller.open_viewer(0).await;
    for _ in 0..3 {
        controller.advance().await;
    }
    if let Some(photo) = controller.store().focused() {
        log::info!(
            "focused photo {}: {} ({})",
            photo.id,
            photo.title(),
            photo.best_url()
        );
    }

    controller.share_focused();
    controller.teardown();
    Ok(())
}
