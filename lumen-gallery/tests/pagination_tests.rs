//! Pagination engine behavior: no overlapping fetches, monotonic page
//! cursor, dedup across pages.

mod common;

use std::time::Duration;

use common::{MockPhotoService, Scripted, page_of, service};
use lumen_gallery::{GalleryStore, PageLoad, Paginator};

fn paginator_over(mock: MockPhotoService) -> (Paginator, GalleryStore) {
    let store = GalleryStore::new();
    (Paginator::new(store.clone(), service(mock)), store)
}

#[tokio::test]
async fn first_page_load_populates_the_store() {
    let mock = MockPhotoService::new();
    let ids = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    mock.script_page(1, Scripted::Ok(page_of(&ids, true)));
    let (paginator, store) = paginator_over(mock);

    let outcome = paginator.load_next_page().await.unwrap();

    assert_eq!(outcome, PageLoad::Loaded { appended: 10 });
    assert_eq!(store.len(), 10);
    assert_eq!(store.current_page(), 2);
    assert!(!store.is_fetching_page());
}

#[tokio::test]
async fn overlapping_triggers_issue_exactly_one_request() {
    let mock = MockPhotoService::with_delay(Duration::from_millis(20));
    mock.script_page(1, Scripted::Ok(page_of(&["a", "b"], true)));
    let mock = service(mock);
    let store = GalleryStore::new();
    let paginator = Paginator::new(store.clone(), mock.clone());

    let (first, second) = tokio::join!(paginator.load_next_page(), paginator.load_next_page());

    let outcomes = [first.unwrap(), second.unwrap()];
    assert!(outcomes.contains(&PageLoad::Loaded { appended: 2 }));
    assert!(outcomes.contains(&PageLoad::AlreadyFetching));
    assert_eq!(mock.page_calls(), 1);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn page_cursor_only_advances_on_success() {
    let mock = MockPhotoService::new();
    mock.script_page(1, Scripted::Ok(page_of(&["a"], true)));
    mock.script_page(2, Scripted::Ok(page_of(&["b"], true)));
    // Page 3 fails once, then succeeds on the retry.
    mock.script_page(3, Scripted::TransportError);
    mock.script_page(3, Scripted::Ok(page_of(&["c"], false)));
    let (paginator, store) = paginator_over(mock);

    assert_eq!(store.current_page(), 1);
    paginator.load_next_page().await.unwrap();
    assert_eq!(store.current_page(), 2);
    paginator.load_next_page().await.unwrap();
    assert_eq!(store.current_page(), 3);

    assert!(paginator.load_next_page().await.is_err());
    assert_eq!(store.current_page(), 3);
    assert!(!store.is_fetching_page());

    paginator.load_next_page().await.unwrap();
    assert_eq!(store.current_page(), 4);
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn server_repeating_photos_across_pages_never_duplicates() {
    let mock = MockPhotoService::new();
    mock.script_page(1, Scripted::Ok(page_of(&["a", "b", "c"], true)));
    mock.script_page(2, Scripted::Ok(page_of(&["c", "b", "d"], false)));
    let (paginator, store) = paginator_over(mock);

    paginator.load_next_page().await.unwrap();
    let outcome = paginator.load_next_page().await.unwrap();

    assert_eq!(outcome, PageLoad::Loaded { appended: 1 });
    assert_eq!(store.len(), 4);
    let ids: Vec<String> = store
        .photos()
        .iter()
        .map(|p| p.id.as_str().to_string())
        .collect();
    assert_eq!(ids, ["a", "b", "c", "d"]);
}

#[tokio::test]
async fn malformed_page_is_treated_as_failure() {
    let mock = MockPhotoService::new();
    mock.script_page(1, Scripted::Malformed);
    let (paginator, store) = paginator_over(mock);

    assert!(paginator.load_next_page().await.is_err());

    assert!(store.is_empty());
    assert_eq!(store.current_page(), 1);
    assert!(!store.is_fetching_page());
}
