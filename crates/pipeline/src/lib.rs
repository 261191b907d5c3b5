//! Pipeline for filtering camp listings by facet.
//!
//! This crate provides:
//! - Attribute inference for facets that only exist as free text
//! - Filter trait and one implementation per facet
//! - FilterPipeline for composing the active filters of a FilterState
//!
//! ## Architecture
//! Filtering is a stateless pass over the catalog, re-run in full on every
//! change to the selection:
//! 1. The caller builds a FilterState from user input
//! 2. FilterPipeline::from_state keeps only the active constraints
//! 3. apply() returns the matching entries in source order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterOptions, FilterPipeline, FilterState};
//!
//! let state = FilterState {
//!     town: Some("Amherst".to_string()),
//!     require_early_dropoff: true,
//!     ..FilterState::default()
//! };
//!
//! let pipeline = FilterPipeline::from_state(&state, &FilterOptions::default());
//! let matching = pipeline.apply(catalog.entries());
//! ```

pub mod traits;
pub mod inference;
pub mod filter_state;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use inference::{DerivedFacets, InferencePolicy, has_early_dropoff, has_late_pickup};
pub use filter_state::{FilterOptions, FilterState};
pub use filters::UnknownCostPolicy;
pub use filter_pipeline::{FilterPipeline, filter_entries};
