//! The user's current filter selection and the engine's policy options.

use crate::filters::UnknownCostPolicy;
use crate::inference::InferencePolicy;
use catalog::CategoryId;
use chrono::NaiveDate;

/// Snapshot of every facet constraint, rebuilt on each user interaction.
///
/// `None`, blank strings and `false` all mean "no constraint on this facet".
/// Values are expected to be normalized by the caller (numbers already
/// parsed); the engine does no validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively as a substring
    pub search: Option<String>,
    pub age_min: Option<u8>,
    pub age_max: Option<u8>,
    /// Exact, case-sensitive town name
    pub town: Option<String>,
    pub category: Option<CategoryId>,
    /// Highest acceptable weekly cost in dollars
    pub cost_max: Option<f64>,
    /// Monday of the week the child needs covered
    pub week: Option<NaiveDate>,
    pub require_early_dropoff: bool,
    pub require_late_pickup: bool,
    pub require_financial_aid: bool,
}

impl FilterState {
    /// A state with no active constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// The case-folded, trimmed search term, if any
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }

    pub fn active_town(&self) -> Option<&str> {
        non_blank(self.town.as_deref())
    }

    pub fn active_category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    /// True if no facet is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.search_term().is_none()
            && self.age_min.is_none()
            && self.age_max.is_none()
            && self.active_town().is_none()
            && self.active_category().is_none()
            && self.cost_max.is_none()
            && self.week.is_none()
            && !self.require_early_dropoff
            && !self.require_late_pickup
            && !self.require_financial_aid
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Policy choices that change how constraints are evaluated.
///
/// These are fixed for a session; they are not part of the user's selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub inference: InferencePolicy,
    pub unknown_cost: UnknownCostPolicy,
}
