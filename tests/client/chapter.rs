//! Chapter entity tests: derived properties, refresh, intro pseudo-chapter,
//! sibling navigation, and count verification.

use std::sync::Arc;

use serde_json::json;
use versicle::{Bible, Chapter, Error, FetchPolicy};

use crate::support;

#[tokio::test]
async fn derived_properties_before_refresh() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let chapter = Chapter::from_id("GEN.1", Arc::clone(bible.context()));

    assert_eq!(chapter.book_id(), "GEN");
    assert_eq!(chapter.number(), 1);
    assert_eq!(chapter.content(), "");
    assert_eq!(chapter.verse_count(), 0);
    assert!(chapter.verse_list().is_empty());
    assert!(chapter.previous_chapter().is_none());
    assert!(chapter.next_chapter().is_none());
}

#[tokio::test]
async fn refresh_populates_content_and_siblings() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut chapter = Chapter::from_id("GEN.1", Arc::clone(bible.context()));

    chapter.refresh_data().await.unwrap();

    assert_eq!(chapter.name(), Some("Genesis 1"));
    assert_eq!(chapter.verse_count(), 3);
    let verses = chapter.verse_list();
    assert_eq!(verses.len(), 3);
    assert_eq!(
        verses[0],
        "In the beginning God created the heavens and the earth."
    );
    assert_eq!(
        chapter.previous_chapter().map(|c| c.id().to_string()),
        Some("GEN.intro".to_string())
    );
    assert_eq!(
        chapter.next_chapter().map(|c| c.id().to_string()),
        Some("GEN.2".to_string())
    );
}

#[tokio::test]
async fn intro_chapter_reports_zero_counts() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut chapter = Chapter::from_id("GEN.intro", Arc::clone(bible.context()));

    chapter.refresh_data().await.unwrap();

    assert_eq!(chapter.number(), 0);
    assert_eq!(chapter.verse_count(), 0);
    assert!(chapter.verse_list().is_empty());
    assert!(!chapter.content().is_empty());
}

#[tokio::test]
async fn number_prefers_payload_over_id() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);

    let chapter = Chapter::from_payload(
        json!({ "id": "GEN.1", "number": "3" }),
        Arc::clone(bible.context()),
    );
    assert_eq!(chapter.number(), 3);

    let intro = Chapter::from_payload(
        json!({ "id": "GEN.intro", "number": "intro" }),
        Arc::clone(bible.context()),
    );
    assert_eq!(intro.number(), 0);
}

#[tokio::test]
async fn get_next_refreshes_the_sibling() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut chapter = Chapter::from_id("GEN.1", Arc::clone(bible.context()));
    chapter.refresh_data().await.unwrap();

    let next = chapter.get_next().await.unwrap().unwrap();
    assert_eq!(next.id(), "GEN.2");
    assert_eq!(next.verse_count(), 2);
}

#[tokio::test]
async fn get_previous_at_book_boundary_is_none() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut intro = Chapter::from_id("GEN.intro", Arc::clone(bible.context()));
    intro.refresh_data().await.unwrap();

    assert!(intro.get_previous().await.unwrap().is_none());
}

#[tokio::test]
async fn sibling_fetch_failure_propagates_by_default() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    // GEN.2's next link points at GEN.3, which the service does not have.
    let mut chapter = Chapter::from_id("GEN.2", Arc::clone(bible.context()));
    chapter.refresh_data().await.unwrap();

    let err = chapter.get_next().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn sibling_fetch_failure_can_log_and_continue() {
    let service = support::test_service()
        .await
        .with_policy(FetchPolicy::LogAndContinue);
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut chapter = Chapter::from_id("GEN.2", Arc::clone(bible.context()));
    chapter.refresh_data().await.unwrap();

    let next = chapter.get_next().await.unwrap().unwrap();
    assert_eq!(next.id(), "GEN.3");
    // Unrefreshed: the fetch failed, the entity is returned as constructed.
    assert_eq!(next.verse_count(), 0);
}

#[tokio::test]
async fn verify_verse_count_accepts_consistent_payloads() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut chapter = Chapter::from_id("GEN.1", Arc::clone(bible.context()));
    chapter.refresh_data().await.unwrap();

    chapter.verify_verse_count().unwrap();
}

#[tokio::test]
async fn verify_verse_count_surfaces_mismatch() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);

    let chapter = Chapter::from_payload(
        json!({
            "id": "GEN.1",
            "content": support::GEN_1_CONTENT,
            "verseCount": 5,
        }),
        Arc::clone(bible.context()),
    );

    let err = chapter.verify_verse_count().unwrap_err();
    match err {
        Error::CountMismatch {
            declared,
            tokenized,
            ..
        } => {
            assert_eq!(declared, 5);
            assert_eq!(tokenized, 3);
        }
        other => panic!("expected count mismatch, got {other:?}"),
    }
}
