//! Free-text search over name, organization, description and town.

use crate::traits::Filter;
use catalog::Entry;

/// Keeps entries whose searchable text contains the search term.
///
/// The term is case-folded once at construction; the entry side is
/// case-folded by `Entry::search_text`.
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            term: term.as_ref().trim().to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.term.is_empty() || entry.search_text().contains(&self.term)
    }
}
