use std::sync::Arc;

use serde_json::Value;

use crate::content::{clean_content, parse_chapters, parse_verses};
use crate::error::Error;
use crate::reference::{parse_id, PassageRef};
use crate::service::ContentParams;

use super::chapter::Chapter;
use super::context::BibleContext;
use super::entity::EntityCore;

/// A verse range spanning one or more chapters of a single book, named by
/// its endpoints: `GEN.1.1-GEN.2.10`.
#[derive(Debug, Clone)]
pub struct Passage {
    core: EntityCore,
}

impl Passage {
    pub fn from_id(id: impl Into<String>, bible: Arc<BibleContext>) -> Self {
        Passage {
            core: EntityCore::from_id(id, bible),
        }
    }

    pub fn from_payload(data: Value, bible: Arc<BibleContext>) -> Self {
        Passage {
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

    /// Human reference ("Genesis 1:1-2:10"), present once data is loaded.
    pub fn name(&self) -> Option<&str> {
        self.core.str_field("reference")
    }

    fn range(&self) -> Option<PassageRef> {
        parse_id(self.id()).ok()?.as_range().cloned()
    }

    /// Id of the first verse in the range, derived from the identifier.
    pub fn first_verse_id(&self) -> Option<String> {
        Some(self.range()?.first_verse_id().to_string())
    }

    /// Id of the last verse in the range.
    pub fn last_verse_id(&self) -> Option<String> {
        Some(self.range()?.last_verse_id().to_string())
    }

    pub fn book_id(&self) -> Option<String> {
        Some(parse_id(self.id()).ok()?.book_id().to_string())
    }

    /// Ids of the chapters the range spans, contiguous and ascending.
    pub fn chapter_ids(&self) -> Vec<String> {
        self.range()
            .map(|range| range.chapter_ids)
            .unwrap_or_default()
    }

    /// Trimmed raw content of the whole passage; empty until loaded.
    pub fn content(&self) -> String {
        clean_content(self.core.str_field("content"))
    }

    /// Verse count declared by the payload, 0 until loaded.
    pub fn verse_count(&self) -> u64 {
        self.core.u64_field("verseCount").unwrap_or(0)
    }

    /// Verse text segments across the whole passage, in document order.
    pub fn verse_list(&self) -> Vec<String> {
        if self.verse_count() == 0 {
            return Vec::new();
        }
        parse_verses(&self.content())
    }

    /// Per-chapter blocks split out of the passage body.
    ///
    /// Aligned positionally with [`chapter_ids`](Self::chapter_ids); when
    /// fewer blocks are recognized than chapters spanned, the tail chapters
    /// get no content. Compare the lengths to detect that.
    pub fn chapter_content_blocks(&self) -> Vec<String> {
        let content = self.content();
        if content.is_empty() {
            return Vec::new();
        }
        parse_chapters(&content)
    }

    /// One chapter entity per spanned chapter id, in range order. When
    /// content is loaded, each chapter is handed its block of the passage
    /// body and a verse count tokenized from that block.
    pub fn chapters(&self) -> Vec<Chapter> {
        let chapter_ids = self.chapter_ids();
        if chapter_ids.is_empty() {
            return Vec::new();
        }

        let blocks = self.chapter_content_blocks();
        chapter_ids
            .into_iter()
            .enumerate()
            .map(|(index, chapter_id)| {
                let mut chapter = Chapter::from_id(chapter_id, Arc::clone(self.core.bible()));
                if let Some(block) = blocks.get(index) {
                    chapter.assign_content(block);
                }
                chapter
            })
            .collect()
    }

    /// Checks the tokenized verse count across the whole passage against the
    /// payload-declared one. Trivially passes before data is loaded.
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

    /// Replaces the payload with a fresh fetch in plain-text mode.
    pub async fn refresh_data(&mut self) -> Result<(), Error> {
        let bible = Arc::clone(self.core.bible());
        let data = bible
            .service()
            .get_passage(bible.bible_id(), self.id(), &ContentParams::text())
            .await?;
        self.core.replace_data(data);
        Ok(())
    }
}
