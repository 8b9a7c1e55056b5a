//! Passage entity tests: identifier-derived structure, per-chapter content
//! assignment, and count consistency.

use std::sync::Arc;

use versicle::{Bible, Passage};

use crate::support;

#[tokio::test]
async fn structure_derives_from_the_identifier_alone() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let passage = Passage::from_id("GEN.1.1-GEN.4.20", Arc::clone(bible.context()));

    assert_eq!(passage.book_id().as_deref(), Some("GEN"));
    assert_eq!(passage.first_verse_id().as_deref(), Some("GEN.1.1"));
    assert_eq!(passage.last_verse_id().as_deref(), Some("GEN.4.20"));
    assert_eq!(
        passage.chapter_ids(),
        vec!["GEN.1", "GEN.2", "GEN.3", "GEN.4"]
    );
}

#[tokio::test]
async fn chapters_without_content_are_bare_entities() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let passage = Passage::from_id("GEN.1.1-GEN.4.20", Arc::clone(bible.context()));

    let chapters = passage.chapters();
    assert_eq!(chapters.len(), 4);
    assert_eq!(chapters[0].id(), "GEN.1");
    assert_eq!(chapters[3].id(), "GEN.4");
    assert!(chapters.iter().all(|c| c.content().is_empty()));
}

#[tokio::test]
async fn refresh_assigns_chapter_blocks() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut passage = Passage::from_id("GEN.1.1-GEN.2.10", Arc::clone(bible.context()));

    passage.refresh_data().await.unwrap();

    assert_eq!(passage.name(), Some("Genesis 1:1-2:10"));
    assert_eq!(passage.verse_count(), 5);
    assert_eq!(passage.verse_list().len(), 5);

    let blocks = passage.chapter_content_blocks();
    assert_eq!(blocks.len(), 2);

    let chapters = passage.chapters();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].id(), "GEN.1");
    assert_eq!(chapters[0].verse_count(), 3);
    assert_eq!(chapters[1].id(), "GEN.2");
    assert_eq!(chapters[1].verse_count(), 2);

    // Per-chapter tokenized counts add up to the passage total.
    let sum: u64 = chapters.iter().map(|c| c.verse_count()).sum();
    assert_eq!(sum, passage.verse_count());
}

#[tokio::test]
async fn block_shortfall_is_detectable() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    // Four chapters spanned, but the fetched body only holds two blocks.
    let passage = Passage::from_payload(
        serde_json::json!({
            "id": "GEN.1.1-GEN.4.20",
            "content": format!("{}\n{}", support::GEN_1_CONTENT, support::GEN_2_CONTENT),
            "verseCount": 5,
        }),
        Arc::clone(bible.context()),
    );

    assert_eq!(passage.chapter_ids().len(), 4);
    assert_eq!(passage.chapter_content_blocks().len(), 2);

    let chapters = passage.chapters();
    assert_eq!(chapters[1].verse_count(), 2);
    // Tail chapters silently carry no content; the length gap above is the
    // caller's signal.
    assert!(chapters[2].content().is_empty());
    assert!(chapters[3].content().is_empty());
}

#[tokio::test]
async fn verify_verse_count_after_refresh() {
    let service = support::test_service().await;
    let bible = Bible::new(support::BIBLE_ID, service);
    let mut passage = Passage::from_id("GEN.1.1-GEN.2.10", Arc::clone(bible.context()));
    passage.refresh_data().await.unwrap();

    passage.verify_verse_count().unwrap();
}
