use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use crate::service::BookParams;

use super::chapter::Chapter;
use super::context::BibleContext;
use super::entity::EntityCore;

/// A book of the bible (`GEN`, `EXO`, ...).
#[derive(Debug, Clone)]
pub struct Book {
    core: EntityCore,
    chapters: Vec<Chapter>,
}

impl Book {
    pub fn from_id(id: impl Into<String>, bible: Arc<BibleContext>) -> Self {
        Book {
            core: EntityCore::from_id(id, bible),
            chapters: Vec::new(),
        }
    }

    pub fn from_payload(data: Value, bible: Arc<BibleContext>) -> Self {
        Book {
            core: EntityCore::from_payload(data, bible),
            chapters: Vec::new(),
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

    /// Short name ("Genesis").
    pub fn name(&self) -> Option<&str> {
        self.core.str_field("name")
    }

    /// Long name or short description.
    pub fn long_name(&self) -> Option<&str> {
        self.core.str_field("nameLong")
    }

    /// Abbreviation used by the service.
    pub fn abbreviation(&self) -> Option<&str> {
        self.core.str_field("abbreviation")
    }

    /// Chapter summaries populated by [`refresh_data`](Self::refresh_data).
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Fetches this book's chapter summaries as chapter entities tagged with
    /// the owning bible.
    pub async fn get_chapters(&self, params: &BookParams) -> Result<Vec<Chapter>, Error> {
        let bible = self.core.bible();
        let summaries = bible
            .service()
            .get_chapters_from_book(bible.bible_id(), self.id(), params)
            .await?;
        Ok(summaries
            .into_iter()
            .map(|data| Chapter::from_payload(data, Arc::clone(bible)))
            .collect())
    }

    /// Fetches book metadata, then the chapter list, replacing both.
    pub async fn refresh_data(&mut self) -> Result<(), Error> {
        let bible = Arc::clone(self.core.bible());
        let data = bible
            .service()
            .get_book(bible.bible_id(), self.id(), &BookParams::default())
            .await?;
        let chapters = self.get_chapters(&BookParams::default()).await?;
        self.core.replace_data(data);
        self.chapters = chapters;
        Ok(())
    }
}
