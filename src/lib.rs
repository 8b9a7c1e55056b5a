//! versicle — typed async client for the scripture content API.
//!
//! Three layers, leaf first:
//!
//! - [`reference`]: pure parsing of canonical identifiers (`GEN`, `GEN.1`,
//!   `GEN.1.1`, `GEN.1.1-GEN.2.10`) into structured references.
//! - [`content`]: pure tokenizing of the service's verse-tagged plain text
//!   (`[1] In the beginning...`) into per-verse and per-chapter segments.
//! - The entity model ([`Bible`], [`Book`], [`Chapter`], [`Passage`],
//!   [`Verse`]): fetchable objects whose structural properties derive from
//!   the parser and whose textual properties derive from the tokenizer,
//!   over payloads fetched through [`BibleService`].
//!
//! ```no_run
//! use versicle::{Bible, BibleService, ContentParams};
//!
//! # async fn run() -> Result<(), versicle::Error> {
//! let service = BibleService::new("my-api-key")?;
//! let bible = Bible::new("06125adad2d5898a-01", service);
//!
//! let chapter = bible.get_chapter("GEN.1", &ContentParams::text()).await?;
//! for verse in chapter.verse_list() {
//!     println!("{verse}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
mod error;
mod model;
pub mod reference;
mod service;

pub use content::{clean_content, parse_chapters, parse_verses, strip_verse_tag};
pub use error::Error;
pub use model::{Bible, BibleContext, Book, Chapter, Passage, Verse};
pub use reference::{fill_chapter_ids, parse_id, parse_verse_id, ParsedReference, PassageRef, VerseRef};
pub use service::{
    BibleService, BiblesParams, BookParams, BooksParams, ContentParams, ContentType, FetchPolicy,
    Medium, SearchParams,
};
