//! Reference-identifier parsing.
//!
//! Canonical identifiers are `.`-delimited: `GEN` (book), `GEN.1` (chapter),
//! `GEN.1.1` (verse). A passage is two full verse identifiers joined with a
//! single `-`, e.g. `GEN.1.1-GEN.2.10`. The `intro` pseudo-chapter and verse
//! `0` carry number 0.
//!
//! Everything here is pure and synchronous; no I/O, no shared state.

use crate::error::Error;

/// Structured form of a book, chapter, or verse identifier.
///
/// Presence of the chapter and verse fields is driven by segment count, not
/// by whether the segment parsed as a number: `GEN.intro` yields
/// `chapter_id = Some("GEN.intro")` with `chapter_number = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRef {
    pub book_id: String,
    pub chapter_id: Option<String>,
    pub chapter_number: u32,
    pub verse_id: Option<String>,
    pub verse_number: u32,
}

/// Structured form of a passage identifier: two verse endpoints and the
/// contiguous run of chapter ids the range spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRef {
    pub book_id: String,
    pub first: VerseRef,
    pub last: VerseRef,
    pub chapter_ids: Vec<String>,
}

impl PassageRef {
    pub fn first_verse_id(&self) -> &str {
        self.first.verse_id.as_deref().unwrap_or_default()
    }

    pub fn last_verse_id(&self) -> &str {
        self.last.verse_id.as_deref().unwrap_or_default()
    }
}

/// Result of [`parse_id`]: either a single book/chapter/verse reference or a
/// passage range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    Single(VerseRef),
    Range(PassageRef),
}

impl ParsedReference {
    pub fn book_id(&self) -> &str {
        match self {
            ParsedReference::Single(verse) => &verse.book_id,
            ParsedReference::Range(passage) => &passage.book_id,
        }
    }

    /// Spanned chapter ids for a range; empty for a single reference.
    pub fn chapter_ids(&self) -> &[String] {
        match self {
            ParsedReference::Single(_) => &[],
            ParsedReference::Range(passage) => &passage.chapter_ids,
        }
    }

    pub fn as_range(&self) -> Option<&PassageRef> {
        match self {
            ParsedReference::Single(_) => None,
            ParsedReference::Range(passage) => Some(passage),
        }
    }
}

/// Parses a `.`-delimited identifier with one to three segments.
pub fn parse_verse_id(id: &str) -> Result<VerseRef, Error> {
    if id.is_empty() {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "identifier is empty",
        });
    }

    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() > 3 {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "more than three segments",
        });
    }
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "empty segment",
        });
    }

    let book_id = segments[0].to_string();

    let mut chapter_id = None;
    let mut chapter_number = 0;
    if segments.len() >= 2 {
        chapter_id = Some(format!("{}.{}", segments[0], segments[1]));
        chapter_number = segments[1].parse().unwrap_or(0);
    }

    let mut verse_id = None;
    let mut verse_number = 0;
    if segments.len() == 3 {
        verse_id = Some(id.to_string());
        verse_number = segments[2].parse().unwrap_or(0);
    }

    Ok(VerseRef {
        book_id,
        chapter_id,
        chapter_number,
        verse_id,
        verse_number,
    })
}

/// Parses any reference identifier, including passage ranges.
///
/// A passage is exactly two full verse identifiers joined with `-`; both
/// endpoints must name the same book, and the endpoint chapters must not run
/// backwards.
pub fn parse_id(id: &str) -> Result<ParsedReference, Error> {
    let mut sides = id.split('-');
    let left = sides.next().unwrap_or_default();

    let Some(right) = sides.next() else {
        return Ok(ParsedReference::Single(parse_verse_id(id)?));
    };

    if sides.next().is_some() {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "more than one range separator",
        });
    }

    let first = parse_verse_id(left)?;
    let last = parse_verse_id(right)?;

    if first.verse_id.is_none() || last.verse_id.is_none() {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "passage endpoints must be full verse identifiers",
        });
    }
    if first.book_id != last.book_id {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "passage endpoints name different books",
        });
    }

    let chapter_ids = fill_chapter_ids(first.chapter_number, last.chapter_number, &first.book_id)?;
    let book_id = first.book_id.clone();

    Ok(ParsedReference::Range(PassageRef {
        book_id,
        first,
        last,
        chapter_ids,
    }))
}

/// Produces the inclusive ascending run `"{book}.{first}"..="{book}.{last}"`.
pub fn fill_chapter_ids(first: u32, last: u32, book_id: &str) -> Result<Vec<String>, Error> {
    if last < first {
        return Err(Error::InvalidChapterRange { first, last });
    }
    Ok((first..=last)
        .map(|number| format!("{}.{}", book_id, number))
        .collect())
}
