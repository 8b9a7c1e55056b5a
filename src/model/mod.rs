//! Reference entities: Bible, Book, Chapter, Passage, Verse.
//!
//! Each entity binds the identifier parser and content tokenizer to a raw
//! fetched payload. Construction never fetches; `refresh_data` is the only
//! operation that touches the network on an existing entity, and it replaces
//! the payload wholesale. Derived properties are recomputed from the current
//! id and payload on each access — identifiers are immutable after
//! construction, so repeated reads are consistent.

mod bible;
mod book;
mod chapter;
mod context;
mod entity;
mod passage;
mod verse;

pub use bible::Bible;
pub use book::Book;
pub use chapter::Chapter;
pub use context::BibleContext;
pub use passage::Passage;
pub use verse::Verse;
