//! Verse entity tests: tag stripping and sibling navigation.

use std::sync::Arc;

use serde_json::json;
use versicle::{Bible, Verse};

use crate::support;

#[tokio::test]
async fn derived_ids_from_identifier() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let verse = Verse::from_id("GEN.1.2", Arc::clone(bible.context()));

    assert_eq!(verse.book_id(), "GEN");
    assert_eq!(verse.chapter_id().as_deref(), Some("GEN.1"));
    assert_eq!(verse.number(), 2);
    assert_eq!(verse.content(), "");
}

#[tokio::test]
async fn content_strips_own_tag_only() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);

    let verse = Verse::from_payload(
        json!({
            "id": "GEN.1.5",
            "content": "  [5] In the beginning... ",
        }),
        Arc::clone(bible.context()),
    );
    assert_eq!(verse.content(), "In the beginning...");

    // Other numerals in the text are untouched.
    let psalm = Verse::from_payload(
        json!({
            "id": "PSA.119.5",
            "content": "[5] verse 5 of 176",
        }),
        Arc::clone(bible.context()),
    );
    assert_eq!(psalm.content(), "verse 5 of 176");
}

#[tokio::test]
async fn refresh_populates_and_links_siblings() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut verse = Verse::from_id("GEN.1.2", Arc::clone(bible.context()));

    assert!(verse.previous_verse().is_none());

    verse.refresh_data().await.unwrap();

    assert_eq!(verse.name(), Some("Genesis 1:2"));
    assert_eq!(
        verse.content(),
        "And the earth was without form, and void."
    );
    assert_eq!(
        verse.previous_verse().map(|v| v.id().to_string()),
        Some("GEN.1.1".to_string())
    );
    assert_eq!(
        verse.next_verse().map(|v| v.id().to_string()),
        Some("GEN.1.3".to_string())
    );
}

#[tokio::test]
async fn get_previous_refreshes_the_sibling() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut verse = Verse::from_id("GEN.1.2", Arc::clone(bible.context()));
    verse.refresh_data().await.unwrap();

    let previous = verse.get_previous().await.unwrap().unwrap();
    assert_eq!(previous.id(), "GEN.1.1");
    assert_eq!(
        previous.content(),
        "In the beginning God created the heavens and the earth."
    );
}

#[tokio::test]
async fn get_previous_at_chapter_start_is_none() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut verse = Verse::from_id("GEN.1.1", Arc::clone(bible.context()));
    verse.refresh_data().await.unwrap();

    assert!(verse.get_previous().await.unwrap().is_none());
}
