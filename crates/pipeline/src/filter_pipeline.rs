//! The FilterPipeline orchestrates the facet filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together, plus `FilterPipeline::from_state` which turns a `FilterState`
//! snapshot into the pipeline of its active constraints.

use crate::filter_state::{FilterOptions, FilterState};
use crate::filters::*;
use crate::traits::Filter;
use catalog::Entry;

/// Chains filters together into a conjunctive (AND) predicate.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::from_state(&state, &FilterOptions::default());
/// let matching = pipeline.apply(catalog.entries());
/// println!("{} camps found", matching.len());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline. It matches everything.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for a filter selection.
    ///
    /// Only active constraints become filters, so an inactive facet can never
    /// exclude anything. Filters are added in a fixed order: search, age,
    /// town, category, cost, week, early drop-off, late pickup, financial
    /// aid. That order decides which filter `first_rejection` reports.
    pub fn from_state(state: &FilterState, options: &FilterOptions) -> Self {
        let mut pipeline = Self::new();

        if let Some(term) = state.search_term() {
            pipeline = pipeline.add_filter(SearchFilter::new(term));
        }
        if state.age_min.is_some() || state.age_max.is_some() {
            pipeline = pipeline.add_filter(AgeRangeFilter::new(state.age_min, state.age_max));
        }
        if let Some(town) = state.active_town() {
            pipeline = pipeline.add_filter(TownFilter::new(town));
        }
        if let Some(category) = state.active_category() {
            pipeline = pipeline.add_filter(CategoryFilter::new(category));
        }
        if let Some(ceiling) = state.cost_max {
            pipeline = pipeline.add_filter(CostCeilingFilter::new(ceiling, options.unknown_cost));
        }
        if let Some(week) = state.week {
            pipeline = pipeline.add_filter(WeekFilter::new(week));
        }
        if state.require_early_dropoff {
            pipeline = pipeline.add_filter(EarlyDropoffFilter::new(options.inference));
        }
        if state.require_late_pickup {
            if options.inference.infers_late_pickup() {
                pipeline = pipeline.add_filter(LatePickupFilter::new(options.inference));
            } else {
                tracing::warn!(
                    "Late pickup is not inferred under {:?}; ignoring the constraint",
                    options.inference
                );
            }
        }
        if state.require_financial_aid {
            pipeline = pipeline.add_filter(FinancialAidFilter);
        }

        pipeline
    }

    /// Number of active filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the active filters in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// True if the entry passes every filter
    pub fn matches(&self, entry: &Entry) -> bool {
        self.filters.iter().all(|filter| filter.matches(entry))
    }

    /// Name of the first filter that rejects the entry, or `None` if it
    /// passes them all
    pub fn first_rejection(&self, entry: &Entry) -> Option<&str> {
        self.filters
            .iter()
            .find(|filter| !filter.matches(entry))
            .map(|filter| filter.name())
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with every input entry, in input order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Keep the entries it matches
    ///    c. Log output count
    /// 3. Return what is left
    ///
    /// The input is only borrowed and relative order is preserved. An empty
    /// result is a normal outcome.
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut current: Vec<&'a Entry> = entries.into_iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter entries by a selection in one call.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    state: &FilterState,
    options: &FilterOptions,
) -> Vec<&'a Entry> {
    FilterPipeline::from_state(state, options).apply(entries)
}
