use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use crate::service::{BibleService, BookParams, BooksParams, ContentParams};

use super::book::Book;
use super::chapter::Chapter;
use super::context::BibleContext;
use super::passage::Passage;
use super::verse::Verse;

/// A bible (one translation): the root entity. Owns the shared
/// [`BibleContext`] that all derived entities reference.
#[derive(Debug)]
pub struct Bible {
    context: Arc<BibleContext>,
    data: Value,
    books: Vec<Book>,
}

impl Bible {
    /// Constructs from a bible id; data stays empty until
    /// [`refresh_data`](Self::refresh_data).
    pub fn new(bible_id: impl Into<String>, service: BibleService) -> Self {
        Bible {
            context: Arc::new(BibleContext::new(bible_id.into(), service)),
            data: Value::Object(Default::default()),
            books: Vec::new(),
        }
    }

    /// Constructs from a fetched payload (e.g. an element of a
    /// [`BibleService::get_bibles`] listing); the id is read from the
    /// payload's `id` field.
    pub fn from_payload(data: Value, service: BibleService) -> Self {
        let bible_id = data
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Bible {
            context: Arc::new(BibleContext::new(bible_id, service)),
            data,
            books: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        self.context.bible_id()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Books populated by [`refresh_data`](Self::refresh_data).
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The shared context handed to derived entities. Useful for
    /// constructing entities directly via their `from_id` constructors.
    pub fn context(&self) -> &Arc<BibleContext> {
        &self.context
    }

    /// Fetches bible metadata, then the book list, strictly in sequence,
    /// replacing both.
    pub async fn refresh_data(&mut self) -> Result<(), Error> {
        let data = self.context.service().get_bible(self.id()).await?;
        let books = self.get_books(&BooksParams::default()).await?;
        self.data = data;
        self.books = books;
        Ok(())
    }

    /// Fetches all books of this bible.
    pub async fn get_books(&self, params: &BooksParams) -> Result<Vec<Book>, Error> {
        let payloads = self
            .context
            .service()
            .get_books(self.id(), params)
            .await?;
        Ok(payloads
            .into_iter()
            .map(|data| Book::from_payload(data, Arc::clone(&self.context)))
            .collect())
    }

    /// Fetches a single book by id (`GEN`).
    pub async fn get_book(&self, book_id: &str, params: &BookParams) -> Result<Book, Error> {
        let data = self
            .context
            .service()
            .get_book(self.id(), book_id, params)
            .await?;
        Ok(Book::from_payload(data, Arc::clone(&self.context)))
    }

    /// Fetches a single chapter by id (`GEN.1`, `GEN.intro`).
    pub async fn get_chapter(
        &self,
        chapter_id: &str,
        params: &ContentParams,
    ) -> Result<Chapter, Error> {
        let data = self
            .context
            .service()
            .get_chapter(self.id(), chapter_id, params)
            .await?;
        Ok(Chapter::from_payload(data, Arc::clone(&self.context)))
    }

    /// Fetches a passage by range id (`GEN.1.1-GEN.2.10`).
    pub async fn get_passage(
        &self,
        passage_id: &str,
        params: &ContentParams,
    ) -> Result<Passage, Error> {
        let data = self
            .context
            .service()
            .get_passage(self.id(), passage_id, params)
            .await?;
        Ok(Passage::from_payload(data, Arc::clone(&self.context)))
    }

    /// Fetches a single verse by id (`GEN.1.1`).
    pub async fn get_verse(&self, verse_id: &str, params: &ContentParams) -> Result<Verse, Error> {
        let data = self
            .context
            .service()
            .get_verse(self.id(), verse_id, params)
            .await?;
        Ok(Verse::from_payload(data, Arc::clone(&self.context)))
    }
}
