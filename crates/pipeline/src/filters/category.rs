//! Category membership.

use crate::traits::Filter;
use catalog::{CategoryId, Entry};

/// Keeps camps tagged with the given category id.
pub struct CategoryFilter {
    category: CategoryId,
}

impl CategoryFilter {
    pub fn new(category: impl Into<CategoryId>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.in_category(&self.category)
    }
}
