//! Core domain types for the camp catalog.
//!
//! Every optional piece of a listing is modelled explicitly here. Nested
//! groups (ages, location, cost, ...) are always present and hold `Option`
//! fields, and list fields are always present but possibly empty. Defaults
//! are substituted once, in the parser, so read sites never have to guess.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable, unique identifier of a camp listing
pub type EntryId = String;

/// Identifier of a category in the static reference list
pub type CategoryId = String;

// =============================================================================
// Entry and its field groups
// =============================================================================

/// One catalog listing (a camp).
///
/// Entries are built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub ages: AgeRange,
    pub location: Location,
    pub cost: Cost,
    /// Category membership; order carries no meaning
    pub categories: Vec<CategoryId>,
    pub schedule: Schedule,
    pub registration: Registration,
    pub source: SourceInfo,
    /// Field names flagged as missing or uncertain in the source data
    pub incomplete: Vec<String>,
}

impl Entry {
    /// Create an entry with only an id and a name; every other field is
    /// absent. Handy for tests and programmatic construction.
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            organization: None,
            description: None,
            ages: AgeRange::default(),
            location: Location::default(),
            cost: Cost::default(),
            categories: Vec::new(),
            schedule: Schedule::default(),
            registration: Registration::default(),
            source: SourceInfo::default(),
            incomplete: Vec::new(),
        }
    }

    /// The case-folded text searched by free-text queries.
    ///
    /// Joins name, organization, description and town with single spaces,
    /// skipping whatever is missing.
    pub fn search_text(&self) -> String {
        let parts = [
            Some(self.name.as_str()).filter(|name| !name.is_empty()),
            self.organization.as_deref(),
            self.description.as_deref(),
            self.location.town.as_deref(),
        ];

        parts
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// True if the listing belongs to the given category
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// True if a session starts on the given Monday
    pub fn runs_week(&self, week: NaiveDate) -> bool {
        self.schedule.weeks.contains(&week)
    }
}

/// Accepted age range. Either bound may be unknown.
///
/// `min <= max` is expected but not enforced; see `Catalog::validate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

impl AgeRange {
    pub fn is_unknown(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub town: Option<String>,
    pub address: Option<String>,
}

/// Weekly cost and aid information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    /// Price of one week in dollars. `Some(0.0)` is a free camp, `None`
    /// means the price is not known.
    pub per_week: Option<f64>,
    pub financial_aid: bool,
    pub notes: Option<String>,
}

/// Hours and session calendar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Free text, e.g. "9am - 3pm"
    pub hours: Option<String>,
    /// Free text describing before/after care
    pub extended_care: Option<String>,
    /// The Monday of each session, in source order (not necessarily sorted)
    pub weeks: Vec<NaiveDate>,
    pub session_length: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub opens: Option<DateOrText>,
    pub deadline: Option<DateOrText>,
    pub url: Option<String>,
}

/// Where the listing came from and when it was last checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub url: Option<String>,
    pub last_verified: Option<DateOrText>,
}

/// A field that is usually an ISO date but sometimes free text
/// ("rolling", "early March", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateOrText {
    Date(NaiveDate),
    Text(String),
}

impl DateOrText {
    /// Parse an ISO `YYYY-MM-DD` date, keeping anything else as text
    pub fn parse(raw: &str) -> Self {
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => DateOrText::Date(date),
            Err(_) => DateOrText::Text(raw.to_string()),
        }
    }
}

impl std::fmt::Display for DateOrText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrText::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateOrText::Text(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A category from the static reference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

// =============================================================================
// Catalog - the immutable session snapshot
// =============================================================================

/// Everything loaded at startup, held as one immutable snapshot.
///
/// Entries keep their source order; `entry_index` maps ids to positions for
/// the detail-view lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) entries: Vec<Entry>,
    pub(crate) categories: Vec<Category>,
    /// Regions payload, carried through untouched
    pub(crate) regions: serde_json::Value,
    pub(crate) last_updated: Option<String>,

    pub(crate) entry_index: HashMap<EntryId, usize>,
    pub(crate) category_index: HashMap<CategoryId, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed parts.
    ///
    /// Indices are built here; call `validate` to check id uniqueness.
    pub fn from_parts(
        entries: Vec<Entry>,
        categories: Vec<Category>,
        regions: serde_json::Value,
        last_updated: Option<String>,
    ) -> Self {
        let mut catalog = Self {
            entries,
            categories,
            regions,
            last_updated,
            entry_index: HashMap::new(),
            category_index: HashMap::new(),
        };
        catalog.build_indices();
        catalog
    }

    /// All entries in source order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry for the detail view
    ///
    /// Returns `None` for unknown ids; callers treat that as a no-op.
    pub fn get_entry(&self, id: &str) -> Option<&Entry> {
        self.entry_index.get(id).map(|&pos| &self.entries[pos])
    }

    /// All categories in reference-list order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&pos| &self.categories[pos])
    }

    /// Display names of an entry's categories, at most `limit` of them.
    ///
    /// Unknown category ids are skipped, not reported.
    pub fn category_names(&self, entry: &Entry, limit: usize) -> Vec<&str> {
        entry
            .categories
            .iter()
            .take(limit)
            .filter_map(|id| self.get_category(id))
            .map(|category| category.name.as_str())
            .collect()
    }

    /// Distinct towns present in the data, sorted
    pub fn towns(&self) -> Vec<&str> {
        let mut towns: Vec<&str> = self
            .entries
            .iter()
            .filter_map(|entry| entry.location.town.as_deref())
            .collect();
        towns.sort_unstable();
        towns.dedup();
        towns
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn regions(&self) -> &serde_json::Value {
        &self.regions
    }

    /// (entries, categories) counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.entries.len(), self.categories.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), serde_json::Value::Null, None)
    }
}
