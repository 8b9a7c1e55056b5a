use crate::service::BibleService;

/// Identity and fetch client shared by every entity derived from a bible.
///
/// Entities hold this behind an `Arc`; a child entity never owns its own
/// copy of the service or the bible id.
#[derive(Debug)]
pub struct BibleContext {
    bible_id: String,
    service: BibleService,
}

impl BibleContext {
    pub(crate) fn new(bible_id: String, service: BibleService) -> Self {
        BibleContext { bible_id, service }
    }

    /// Id of the bible (translation) this context addresses.
    pub fn bible_id(&self) -> &str {
        &self.bible_id
    }

    pub fn service(&self) -> &BibleService {
        &self.service
    }
}
