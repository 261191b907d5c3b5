//! Filter implementations, one per facet.
//!
//! Listed in the order the FilterPipeline evaluates them.

pub mod text_search;
pub mod age_range;
pub mod town;
pub mod category;
pub mod cost_ceiling;
pub mod session_week;
pub mod extended_care;
pub mod financial_aid;

// Re-export for convenience
pub use text_search::SearchFilter;
pub use age_range::AgeRangeFilter;
pub use town::TownFilter;
pub use category::CategoryFilter;
pub use cost_ceiling::{CostCeilingFilter, UnknownCostPolicy};
pub use session_week::WeekFilter;
pub use extended_care::{EarlyDropoffFilter, LatePickupFilter};
pub use financial_aid::FinancialAidFilter;
