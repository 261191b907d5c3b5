//! Age overlap between the selected range and the camp's accepted ages.

use crate::traits::Filter;
use catalog::Entry;

/// Rejects camps whose known age bounds fall entirely outside the selection.
///
/// ## Algorithm
/// One-sided and inclusive rather than a strict interval intersection:
/// 1. Reject if the camp's max age is known and below the selected minimum
/// 2. Reject if the camp's min age is known and above the selected maximum
/// 3. An unknown bound never rejects on its side
pub struct AgeRangeFilter {
    min: Option<u8>,
    max: Option<u8>,
}

impl AgeRangeFilter {
    pub fn new(min: Option<u8>, max: Option<u8>) -> Self {
        Self { min, max }
    }
}

impl Filter for AgeRangeFilter {
    fn name(&self) -> &str {
        "AgeRangeFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        let too_old = matches!(
            (self.min, entry.ages.max),
            (Some(wanted_min), Some(camp_max)) if camp_max < wanted_min
        );
        let too_young = matches!(
            (self.max, entry.ages.min),
            (Some(wanted_max), Some(camp_min)) if camp_min > wanted_max
        );
        !too_old && !too_young
    }
}
