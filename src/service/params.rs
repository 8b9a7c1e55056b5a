//! Typed request parameters.
//!
//! The wire format uses hyphenated query names (`content-type`,
//! `include-verse-numbers`); the structs here carry the idiomatic field
//! names and serialize straight to the wire names, replacing the alias-map
//! translation the service used to do per request.

use serde::Serialize;

/// Content rendering requested from the service. The entity layer forces
/// [`ContentType::Text`] when refreshing so the verse-tag tokenizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Html,
    Json,
    Text,
}

/// Filters for listing bibles.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BiblesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma-separated list of bible ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
}

/// Options for listing a bible's books.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BooksParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chapters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chapters_and_sections: Option<bool>,
}

/// Options for fetching a single book or its chapter summaries.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BookParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chapters: Option<bool>,
}

/// Options for fetching chapter, passage, or verse content.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_titles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chapter_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_verse_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_verse_spans: Option<bool>,
    /// Comma-separated list of parallel bible ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_org_id: Option<bool>,
}

impl ContentParams {
    /// Plain-text content, the mode the tokenizer understands.
    pub fn text() -> Self {
        ContentParams {
            content_type: Some(ContentType::Text),
            ..ContentParams::default()
        }
    }
}

/// Search query options.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Restrict results to a book, chapter, or passage range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<String>,
}

impl SearchParams {
    pub fn query(query: impl Into<String>) -> Self {
        SearchParams {
            query: Some(query.into()),
            ..SearchParams::default()
        }
    }
}
