//! HTTP client for the scripture content service.
//!
//! [`BibleService`] wraps a `reqwest::Client` carrying the `api-key` header
//! and the versioned base URL, and exposes one async method per service
//! route. Responses arrive in a `{ "data": ... }` envelope; the client
//! unwraps it and returns the payload as `serde_json::Value`, so unknown
//! fields pass through untouched.
//!
//! Identifier case is normalized here, not in the parser: book and passage
//! ids are uppercased, while ids on the chapter and verse routes are
//! lowercased because the service rejects an uppercase `.INTRO`
//! pseudo-chapter in those paths.

mod params;

pub use params::{BiblesParams, BookParams, BooksParams, ContentParams, ContentType, SearchParams};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::Error;

/// Which catalog the client addresses: text bibles or audio bibles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Medium {
    #[default]
    Text,
    Audio,
}

impl Medium {
    /// Root path segment for this catalog.
    pub fn route_root(self) -> &'static str {
        match self {
            Medium::Text => "bibles",
            Medium::Audio => "audio-bibles",
        }
    }
}

/// What entities do when a sibling-navigation fetch fails.
///
/// The default propagates the error. `LogAndContinue` logs it and hands back
/// the constructed-but-unrefreshed sibling instead, for callers that prefer
/// stale navigation over a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    #[default]
    Propagate,
    LogAndContinue,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Stateless per-call client: base URL, auth header, nothing else. Cheap to
/// clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct BibleService {
    client: reqwest::Client,
    base_url: String,
    medium: Medium,
    policy: FetchPolicy,
}

impl BibleService {
    pub const DEFAULT_VERSION: u32 = 1;

    /// Builds a client for the given API key against the public service URL.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_version(api_key, Self::DEFAULT_VERSION)
    }

    /// Builds a client pinned to a specific API version.
    pub fn with_version(api_key: &str, version: u32) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key)
            .map_err(|err| Error::Config(format!("invalid api key: {}", err)))?;
        headers.insert("api-key", key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(BibleService {
            client,
            base_url: format!("https://api.scripture.api.bible/v{}", version),
            medium: Medium::default(),
            policy: FetchPolicy::default(),
        })
    }

    /// Overrides the base URL. Intended for tests and self-hosted mirrors.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn medium(&self) -> Medium {
        self.medium
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    fn route(&self, tail: &str) -> String {
        format!("{}/{}{}", self.base_url, self.medium.route_root(), tail)
    }

    async fn fetch<T, Q>(&self, url: String, query: Option<&Q>) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!(%url, "GET");
        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Lists bibles matching the given filters.
    pub async fn get_bibles(&self, params: &BiblesParams) -> Result<Vec<Value>, Error> {
        self.fetch(self.route(""), Some(params)).await
    }

    /// Fetches a single bible's metadata.
    pub async fn get_bible(&self, id: &str) -> Result<Value, Error> {
        if id.is_empty() {
            return Err(Error::MissingParameter("id"));
        }
        self.fetch::<Value, ()>(self.route(&format!("/{}", id)), None)
            .await
    }

    /// Lists a bible's books.
    pub async fn get_books(
        &self,
        bible_id: &str,
        params: &BooksParams,
    ) -> Result<Vec<Value>, Error> {
        self.fetch(self.route(&format!("/{}/books", bible_id)), Some(params))
            .await
    }

    /// Fetches a single book.
    pub async fn get_book(
        &self,
        bible_id: &str,
        book_id: &str,
        params: &BookParams,
    ) -> Result<Value, Error> {
        let url = self.route(&format!("/{}/books/{}", bible_id, book_id.to_uppercase()));
        self.fetch(url, Some(params)).await
    }

    /// Lists chapter summaries for a book.
    pub async fn get_chapters_from_book(
        &self,
        bible_id: &str,
        book_id: &str,
        params: &BookParams,
    ) -> Result<Vec<Value>, Error> {
        let url = self.route(&format!(
            "/{}/books/{}/chapters",
            bible_id,
            book_id.to_uppercase()
        ));
        self.fetch(url, Some(params)).await
    }

    /// Fetches a chapter with its content.
    ///
    /// The chapter id is lowercased: the `.intro` pseudo-chapter must be
    /// lowercase on this route.
    pub async fn get_chapter(
        &self,
        bible_id: &str,
        chapter_id: &str,
        params: &ContentParams,
    ) -> Result<Value, Error> {
        let url = self.route(&format!(
            "/{}/chapters/{}",
            bible_id,
            chapter_id.to_lowercase()
        ));
        self.fetch(url, Some(params)).await
    }

    /// Lists verse summaries for a chapter. Chapter id lowercased as on
    /// [`get_chapter`](Self::get_chapter).
    pub async fn get_verses_from_chapter(
        &self,
        bible_id: &str,
        chapter_id: &str,
        params: &ContentParams,
    ) -> Result<Vec<Value>, Error> {
        let url = self.route(&format!(
            "/{}/chapters/{}/verses",
            bible_id,
            chapter_id.to_lowercase()
        ));
        self.fetch(url, Some(params)).await
    }

    /// Fetches a passage (verse range) with its concatenated content.
    pub async fn get_passage(
        &self,
        bible_id: &str,
        passage_id: &str,
        params: &ContentParams,
    ) -> Result<Value, Error> {
        let url = self.route(&format!(
            "/{}/passages/{}",
            bible_id,
            passage_id.to_uppercase()
        ));
        self.fetch(url, Some(params)).await
    }

    /// Fetches a single verse with its content.
    ///
    /// The verse id is lowercased like the chapter routes, so intro verses
    /// (`GEN.intro.0`) reach the service in the case it accepts.
    pub async fn get_verse(
        &self,
        bible_id: &str,
        verse_id: &str,
        params: &ContentParams,
    ) -> Result<Value, Error> {
        let url = self.route(&format!("/{}/verses/{}", bible_id, verse_id.to_lowercase()));
        self.fetch(url, Some(params)).await
    }

    /// Full-text search within a bible. Passthrough; no relevance logic here.
    pub async fn search(&self, bible_id: &str, params: &SearchParams) -> Result<Value, Error> {
        if params.query.is_none() {
            return Err(Error::MissingParameter("query"));
        }
        let url = self.route(&format!("/{}/search", bible_id));
        self.fetch(url, Some(params)).await
    }
}
