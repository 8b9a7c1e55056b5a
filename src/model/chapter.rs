use std::sync::Arc;

use serde_json::Value;

use crate::content::{clean_content, parse_verses};
use crate::error::Error;
use crate::reference::parse_verse_id;
use crate::service::{ContentParams, FetchPolicy};

use super::context::BibleContext;
use super::entity::EntityCore;

/// A single chapter of a book, including the `intro` pseudo-chapter.
#[derive(Debug, Clone)]
pub struct Chapter {
    core: EntityCore,
}

impl Chapter {
    /// Constructs from a chapter id (`GEN.1`, `GEN.intro`); data stays empty
    /// until [`refresh_data`](Self::refresh_data).
    pub fn from_id(id: impl Into<String>, bible: Arc<BibleContext>) -> Self {
        Chapter {
            core: EntityCore::from_id(id, bible),
        }
    }

    /// Constructs from a fetched payload; the id is read from the payload.
    pub fn from_payload(data: Value, bible: Arc<BibleContext>) -> Self {
        Chapter {
            core: EntityCore::from_payload(data, bible),
        }
    }

    pub fn id(&self) -> &str {
        self.core.id()
    }

    pub fn data(&self) -> &Value {
        self.core.data()
    }

    pub fn bible(&self) -> &Arc<BibleContext> {
        self.core.bible()
    }

    /// Human reference ("Genesis 1"), present once data is loaded.
    pub fn name(&self) -> Option<&str> {
        self.core.str_field("reference")
    }

    /// Id of the containing book: payload field when loaded, otherwise the
    /// first identifier segment.
    pub fn book_id(&self) -> String {
        if let Some(book_id) = self.core.str_field("bookId") {
            return book_id.to_string();
        }
        parse_verse_id(self.id())
            .map(|parsed| parsed.book_id)
            .unwrap_or_default()
    }

    /// Chapter number; the `intro` pseudo-chapter reports 0.
    pub fn number(&self) -> u32 {
        match self.core.str_field("number") {
            Some(number) => number.parse().unwrap_or(0),
            None => parse_verse_id(self.id())
                .map(|parsed| parsed.chapter_number)
                .unwrap_or(0),
        }
    }

    /// Trimmed raw content; empty until data is loaded.
    pub fn content(&self) -> String {
        clean_content(self.core.str_field("content"))
    }

    /// Verse count declared by the payload, 0 until loaded.
    pub fn verse_count(&self) -> u64 {
        self.core.u64_field("verseCount").unwrap_or(0)
    }

    /// Verse text segments tokenized out of the content, in document order.
    pub fn verse_list(&self) -> Vec<String> {
        if self.verse_count() == 0 {
            return Vec::new();
        }
        parse_verses(&self.content())
    }

    /// Checks the tokenized verse count against the payload-declared one.
    ///
    /// Only meaningful once both content and a declared count are loaded;
    /// before that it trivially passes.
    pub fn verify_verse_count(&self) -> Result<(), Error> {
        let Some(declared) = self.core.u64_field("verseCount") else {
            return Ok(());
        };
        if self.core.str_field("content").is_none() {
            return Ok(());
        }
        let tokenized = parse_verses(&self.content()).len() as u64;
        if tokenized != declared {
            return Err(Error::CountMismatch {
                id: self.id().to_string(),
                declared,
                tokenized,
            });
        }
        Ok(())
    }

    /// The previous chapter as an unrefreshed entity, or `None` before data
    /// is loaded or at the book boundary.
    pub fn previous_chapter(&self) -> Option<Chapter> {
        let id = self.core.sibling_id("previous")?;
        Some(Chapter::from_id(id, Arc::clone(self.core.bible())))
    }

    /// The next chapter as an unrefreshed entity, or `None`.
    pub fn next_chapter(&self) -> Option<Chapter> {
        let id = self.core.sibling_id("next")?;
        Some(Chapter::from_id(id, Arc::clone(self.core.bible())))
    }

    /// Fetches and returns the previous chapter; `Ok(None)` when there is no
    /// previous link. A failed fetch propagates unless the service is set to
    /// [`FetchPolicy::LogAndContinue`].
    pub async fn get_previous(&self) -> Result<Option<Chapter>, Error> {
        self.refresh_sibling(self.previous_chapter()).await
    }

    /// Fetches and returns the next chapter; `Ok(None)` when there is no
    /// next link.
    pub async fn get_next(&self) -> Result<Option<Chapter>, Error> {
        self.refresh_sibling(self.next_chapter()).await
    }

    async fn refresh_sibling(&self, sibling: Option<Chapter>) -> Result<Option<Chapter>, Error> {
        let Some(mut chapter) = sibling else {
            return Ok(None);
        };
        match chapter.refresh_data().await {
            Ok(()) => Ok(Some(chapter)),
            Err(err) => match self.core.bible().service().policy() {
                FetchPolicy::Propagate => Err(err),
                FetchPolicy::LogAndContinue => {
                    tracing::warn!(
                        chapter = chapter.id(),
                        error = %err,
                        "sibling chapter refresh failed, returning unrefreshed entity"
                    );
                    Ok(Some(chapter))
                }
            },
        }
    }

    /// Replaces the payload with a fresh fetch in plain-text mode, so the
    /// tokenizer-backed properties apply.
    pub async fn refresh_data(&mut self) -> Result<(), Error> {
        let bible = Arc::clone(self.core.bible());
        let data = bible
            .service()
            .get_chapter(bible.bible_id(), self.id(), &ContentParams::text())
            .await?;
        self.core.replace_data(data);
        Ok(())
    }

    /// Used by passages to hand a spanned chapter its slice of the passage
    /// body, with a verse count derived from that slice.
    pub(crate) fn assign_content(&mut self, block: &str) {
        let verse_count = parse_verses(block).len() as u64;
        self.core
            .set_field("content", Value::String(block.to_string()));
        self.core.set_field("verseCount", Value::from(verse_count));
    }
}
