//! Weekly cost ceiling.

use crate::traits::Filter;
use catalog::Entry;

/// What a cost ceiling does with camps whose price is unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownCostPolicy {
    /// Keep them; only known prices above the ceiling are rejected
    #[default]
    Include,
    /// Reject them as soon as a ceiling is set
    Exclude,
}

/// Rejects camps whose weekly cost is above the ceiling.
pub struct CostCeilingFilter {
    ceiling: f64,
    unknown: UnknownCostPolicy,
}

impl CostCeilingFilter {
    pub fn new(ceiling: f64, unknown: UnknownCostPolicy) -> Self {
        Self { ceiling, unknown }
    }
}

impl Filter for CostCeilingFilter {
    fn name(&self) -> &str {
        "CostCeilingFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        match entry.cost.per_week {
            Some(price) => price <= self.ceiling,
            None => self.unknown == UnknownCostPolicy::Include,
        }
    }
}
