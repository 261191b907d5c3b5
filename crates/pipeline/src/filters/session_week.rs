//! Week availability.

use crate::traits::Filter;
use catalog::Entry;
use chrono::NaiveDate;

/// Keeps camps with a session starting on the selected Monday.
///
/// Week lists are not assumed to be sorted.
pub struct WeekFilter {
    week: NaiveDate,
}

impl WeekFilter {
    pub fn new(week: NaiveDate) -> Self {
        Self { week }
    }
}

impl Filter for WeekFilter {
    fn name(&self) -> &str {
        "WeekFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.runs_week(self.week)
    }
}
