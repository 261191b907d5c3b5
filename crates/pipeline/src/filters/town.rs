//! Exact town match.

use crate::traits::Filter;
use catalog::Entry;

/// Keeps camps located in exactly this town (case-sensitive).
/// Camps without a town never match.
pub struct TownFilter {
    town: String,
}

impl TownFilter {
    pub fn new(town: impl Into<String>) -> Self {
        Self { town: town.into() }
    }
}

impl Filter for TownFilter {
    fn name(&self) -> &str {
        "TownFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.location.town.as_deref() == Some(self.town.as_str())
    }
}
