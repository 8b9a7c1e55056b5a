use std::sync::Arc;

use serde_json::Value;

use crate::content::{clean_content, strip_verse_tag};
use crate::error::Error;
use crate::reference::parse_verse_id;
use crate::service::{ContentParams, FetchPolicy};

use super::context::BibleContext;
use super::entity::EntityCore;

/// A single verse.
#[derive(Debug, Clone)]
pub struct Verse {
    core: EntityCore,
}

impl Verse {
    pub fn from_id(id: impl Into<String>, bible: Arc<BibleContext>) -> Self {
        Verse {
            core: EntityCore::from_id(id, bible),
        }
    }

    pub fn from_payload(data: Value, bible: Arc<BibleContext>) -> Self {
        Verse {
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

    /// Human reference ("Genesis 1:1"), present once data is loaded.
    pub fn name(&self) -> Option<&str> {
        self.core.str_field("reference")
    }

    pub fn book_id(&self) -> String {
        if let Some(book_id) = self.core.str_field("bookId") {
            return book_id.to_string();
        }
        parse_verse_id(self.id())
            .map(|parsed| parsed.book_id)
            .unwrap_or_default()
    }

    /// Id of the containing chapter.
    pub fn chapter_id(&self) -> Option<String> {
        if let Some(chapter_id) = self.core.str_field("chapterId") {
            return Some(chapter_id.to_string());
        }
        parse_verse_id(self.id()).ok()?.chapter_id
    }

    /// Verse number; intro verses report 0.
    pub fn number(&self) -> u32 {
        parse_verse_id(self.id())
            .map(|parsed| parsed.verse_number)
            .unwrap_or(0)
    }

    /// Verse text with this verse's own `[n]` tag stripped. Other bracketed
    /// numerals in the text are untouched.
    pub fn content(&self) -> String {
        let raw = clean_content(self.core.str_field("content"));
        strip_verse_tag(&raw, self.number())
    }

    /// The previous verse as an unrefreshed entity, or `None` before data is
    /// loaded or at the chapter boundary.
    pub fn previous_verse(&self) -> Option<Verse> {
        let id = self.core.sibling_id("previous")?;
        Some(Verse::from_id(id, Arc::clone(self.core.bible())))
    }

    /// The next verse as an unrefreshed entity, or `None`.
    pub fn next_verse(&self) -> Option<Verse> {
        let id = self.core.sibling_id("next")?;
        Some(Verse::from_id(id, Arc::clone(self.core.bible())))
    }

    /// Fetches and returns the previous verse; `Ok(None)` when there is no
    /// previous link. A failed fetch propagates unless the service is set to
    /// [`FetchPolicy::LogAndContinue`].
    pub async fn get_previous(&self) -> Result<Option<Verse>, Error> {
        self.refresh_sibling(self.previous_verse()).await
    }

    /// Fetches and returns the next verse; `Ok(None)` when there is no next
    /// link.
    pub async fn get_next(&self) -> Result<Option<Verse>, Error> {
        self.refresh_sibling(self.next_verse()).await
    }

    async fn refresh_sibling(&self, sibling: Option<Verse>) -> Result<Option<Verse>, Error> {
        let Some(mut verse) = sibling else {
            return Ok(None);
        };
        match verse.refresh_data().await {
            Ok(()) => Ok(Some(verse)),
            Err(err) => match self.core.bible().service().policy() {
                FetchPolicy::Propagate => Err(err),
                FetchPolicy::LogAndContinue => {
                    tracing::warn!(
                        verse = verse.id(),
                        error = %err,
                        "sibling verse refresh failed, returning unrefreshed entity"
                    );
                    Ok(Some(verse))
                }
            },
        }
    }

    /// Replaces the payload with a fresh fetch in plain-text mode.
    pub async fn refresh_data(&mut self) -> Result<(), Error> {
        let bible = Arc::clone(self.core.bible());
        let data = bible
            .service()
            .get_verse(bible.bible_id(), self.id(), &ContentParams::text())
            .await?;
        self.core.replace_data(data);
        Ok(())
    }
}
