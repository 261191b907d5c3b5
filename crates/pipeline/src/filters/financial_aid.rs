//! Financial aid availability.

use crate::traits::Filter;
use catalog::Entry;

/// Keeps camps that offer financial aid. Read from the structured cost field.
pub struct FinancialAidFilter;

impl Filter for FinancialAidFilter {
    fn name(&self) -> &str {
        "FinancialAidFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.cost.financial_aid
    }
}
