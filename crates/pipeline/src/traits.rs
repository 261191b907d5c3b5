//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent facet
//! constraints be composed into a FilterPipeline.

use catalog::Entry;

/// One facet constraint.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across threads
/// - `matches` is the per-entry predicate and must be pure
/// - `apply` borrows entries and never mutates or reorders them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/diagnostics)
    fn name(&self) -> &str;

    /// True if the entry satisfies this constraint
    fn matches(&self, entry: &Entry) -> bool;

    /// Keep the entries that satisfy this constraint, in their given order.
    fn apply<'a>(&self, entries: Vec<&'a Entry>) -> Vec<&'a Entry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
