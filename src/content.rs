//! Verse-tag content tokenizing.
//!
//! The service's plain-text content marks each verse with a bracket tag,
//! `[1] In the beginning...`, and separates chapters inside a concatenated
//! passage body with a line break immediately before the next `[1]` tag.
//! These functions split that format into per-verse and per-chapter pieces.
//!
//! Pure and synchronous, like [`crate::reference`].

use std::sync::LazyLock;

use regex::Regex;

static VERSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9]+\]\s").expect("verse tag pattern"));

static CHAPTER_START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[1\]\s").expect("chapter start pattern"));

/// Trims raw content; absent content becomes the empty string.
pub fn clean_content(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Splits verse-tagged content into one text segment per tag, in document
/// order.
///
/// Segments are trimmed and embedded newlines stripped; segments that end up
/// empty are dropped. Text before the first tag (chapter headers, intro
/// front matter) is never a segment, so untagged content yields an empty
/// vec.
pub fn parse_verses(raw: &str) -> Vec<String> {
    let tags: Vec<_> = VERSE_TAG.find_iter(raw).collect();
    let mut verses = Vec::with_capacity(tags.len());

    for (index, tag) in tags.iter().enumerate() {
        let end = tags
            .get(index + 1)
            .map(|next| next.start())
            .unwrap_or(raw.len());
        let segment = raw[tag.end()..end].trim().replace('\n', "");
        if !segment.is_empty() {
            verses.push(segment);
        }
    }

    verses
}

/// Splits a concatenated multi-chapter passage body into per-chapter blocks.
///
/// A new block starts at each `[1]` tag preceded by a line break. Blocks are
/// trimmed; blocks containing no verse tag at all are dropped. The returned
/// length is the number of chapters actually recognized, which callers align
/// positionally against the passage's chapter ids.
pub fn parse_chapters(raw: &str) -> Vec<String> {
    let mut cuts = vec![0];
    for tag in CHAPTER_START_TAG.find_iter(raw) {
        let before = &raw[..tag.start()];
        let gap = &before[before.trim_end().len()..];
        if !before.is_empty() && gap.contains('\n') {
            cuts.push(tag.start());
        }
    }
    cuts.push(raw.len());

    let mut blocks = Vec::with_capacity(cuts.len() - 1);
    for window in cuts.windows(2) {
        let block = raw[window[0]..window[1]].trim();
        if !block.is_empty() && VERSE_TAG.is_match(block) {
            blocks.push(block.to_string());
        }
    }

    blocks
}

/// Removes a verse's own `[n]` tag from its content and trims.
///
/// Exactly one occurrence of the literal tag is removed; any other numerals
/// in the text are left alone.
pub fn strip_verse_tag(raw: &str, number: u32) -> String {
    let tag = format!("[{}]", number);
    raw.replacen(&tag, "", 1).trim().to_string()
}
