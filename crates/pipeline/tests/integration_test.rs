//! Integration tests for the filter engine.
//!
//! These run the pipeline over the fixture dataset shipped with the catalog
//! crate and check the properties every selection must satisfy.

use catalog::{Catalog, Entry};
use chrono::NaiveDate;
use pipeline::{
    FilterOptions, FilterPipeline, FilterState, InferencePolicy, UnknownCostPolicy,
    filter_entries,
};
use std::path::Path;

fn load_fixtures() -> Catalog {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../catalog/tests/fixtures");
    Catalog::load_from_dir(&dir).unwrap()
}

fn ids<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

fn week(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A spread of selections, each with a single active constraint
fn single_constraints() -> Vec<FilterState> {
    let base = FilterState::default;
    vec![
        FilterState { search: Some("camp".to_string()), ..base() },
        FilterState { age_min: Some(11), ..base() },
        FilterState { age_max: Some(7), ..base() },
        FilterState { town: Some("Northampton".to_string()), ..base() },
        FilterState { category: Some("outdoor".to_string()), ..base() },
        FilterState { cost_max: Some(350.0), ..base() },
        FilterState { week: Some(week("2026-07-13")), ..base() },
        FilterState { require_early_dropoff: true, ..base() },
        FilterState { require_late_pickup: true, ..base() },
        FilterState { require_financial_aid: true, ..base() },
    ]
}

/// Merge the active constraints of `extra` into `state`
fn combine(state: &FilterState, extra: &FilterState) -> FilterState {
    FilterState {
        search: extra.search.clone().or_else(|| state.search.clone()),
        age_min: extra.age_min.or(state.age_min),
        age_max: extra.age_max.or(state.age_max),
        town: extra.town.clone().or_else(|| state.town.clone()),
        category: extra.category.clone().or_else(|| state.category.clone()),
        cost_max: extra.cost_max.or(state.cost_max),
        week: extra.week.or(state.week),
        require_early_dropoff: state.require_early_dropoff || extra.require_early_dropoff,
        require_late_pickup: state.require_late_pickup || extra.require_late_pickup,
        require_financial_aid: state.require_financial_aid || extra.require_financial_aid,
    }
}

fn all_options() -> Vec<FilterOptions> {
    let mut options = Vec::new();
    for inference in [InferencePolicy::TimeThreshold, InferencePolicy::Keyword] {
        for unknown_cost in [UnknownCostPolicy::Include, UnknownCostPolicy::Exclude] {
            options.push(FilterOptions {
                inference,
                unknown_cost,
            });
        }
    }
    options
}

#[test]
fn test_empty_state_returns_everything_in_order() {
    let catalog = load_fixtures();
    let filtered = filter_entries(catalog.entries(), &FilterState::default(), &FilterOptions::default());

    let expected: Vec<&Entry> = catalog.entries().iter().collect();
    assert_eq!(ids(&filtered), ids(&expected));
}

#[test]
fn test_adding_a_constraint_never_adds_results() {
    let catalog = load_fixtures();

    for options in all_options() {
        for first in single_constraints() {
            let before = filter_entries(catalog.entries(), &first, &options);
            for second in single_constraints() {
                let narrowed = combine(&first, &second);
                let after = filter_entries(catalog.entries(), &narrowed, &options);

                for entry in &after {
                    assert!(
                        before.iter().any(|e| e.id == entry.id),
                        "{} appeared after narrowing {:?} with {:?}",
                        entry.id,
                        first,
                        second
                    );
                }
            }
        }
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = load_fixtures();

    for options in all_options() {
        for state in single_constraints() {
            let pipeline = FilterPipeline::from_state(&state, &options);
            let once = pipeline.apply(catalog.entries());
            let twice = pipeline.apply(once.iter().copied());

            assert_eq!(ids(&once), ids(&twice), "not idempotent for {:?}", state);
        }
    }
}

#[test]
fn test_input_is_not_mutated() {
    let catalog = load_fixtures();
    let before = catalog.entries().to_vec();

    let state = FilterState {
        town: Some("Amherst".to_string()),
        ..FilterState::default()
    };
    let _ = filter_entries(catalog.entries(), &state, &FilterOptions::default());

    assert_eq!(catalog.entries(), before.as_slice());
}

#[test]
fn test_search_example() {
    let catalog = load_fixtures();
    let options = FilterOptions::default();

    let sun = FilterState { search: Some("sun".to_string()), ..FilterState::default() };
    assert_eq!(ids(&filter_entries(catalog.entries(), &sun, &options)), vec!["sunshine-day-camp"]);

    let xyz = FilterState { search: Some("xyz".to_string()), ..FilterState::default() };
    assert!(filter_entries(catalog.entries(), &xyz, &options).is_empty());
}

#[test]
fn test_town_search_hits_location() {
    let catalog = load_fixtures();
    let state = FilterState {
        search: Some("NORTHAMPTON".to_string()),
        ..FilterState::default()
    };

    let filtered = filter_entries(catalog.entries(), &state, &FilterOptions::default());
    assert_eq!(ids(&filtered), vec!["river-paddlers", "young-makers"]);
}

#[test]
fn test_age_filter_over_dataset() {
    let catalog = load_fixtures();
    let state = FilterState {
        age_min: Some(13),
        ..FilterState::default()
    };

    // sunshine tops out at 12; young-makers has no max; mystery has no ages
    let filtered = filter_entries(catalog.entries(), &state, &FilterOptions::default());
    assert_eq!(
        ids(&filtered),
        vec!["river-paddlers", "young-makers", "code-camp", "mystery-camp"]
    );
}

#[test]
fn test_cost_ceiling_follows_unknown_cost_policy() {
    let catalog = load_fixtures();
    let state = FilterState {
        cost_max: Some(250.0),
        ..FilterState::default()
    };

    let include = FilterOptions::default();
    assert_eq!(
        ids(&filter_entries(catalog.entries(), &state, &include)),
        vec!["young-makers", "code-camp", "mystery-camp"]
    );

    let exclude = FilterOptions {
        unknown_cost: UnknownCostPolicy::Exclude,
        ..FilterOptions::default()
    };
    assert_eq!(
        ids(&filter_entries(catalog.entries(), &state, &exclude)),
        vec!["code-camp"]
    );
}

#[test]
fn test_week_filter_over_dataset() {
    let catalog = load_fixtures();
    let options = FilterOptions::default();

    let july_13 = FilterState { week: Some(week("2026-07-13")), ..FilterState::default() };
    assert_eq!(
        ids(&filter_entries(catalog.entries(), &july_13, &options)),
        vec!["sunshine-day-camp", "river-paddlers"]
    );

    let august = FilterState { week: Some(week("2026-08-10")), ..FilterState::default() };
    assert!(filter_entries(catalog.entries(), &august, &options).is_empty());
}

#[test]
fn test_early_dropoff_by_policy() {
    let catalog = load_fixtures();
    let state = FilterState {
        require_early_dropoff: true,
        ..FilterState::default()
    };

    let time = FilterOptions::default();
    assert_eq!(
        ids(&filter_entries(catalog.entries(), &state, &time)),
        vec!["sunshine-day-camp", "river-paddlers"]
    );

    let keyword = FilterOptions {
        inference: InferencePolicy::Keyword,
        ..FilterOptions::default()
    };
    assert_eq!(
        ids(&filter_entries(catalog.entries(), &state, &keyword)),
        vec!["sunshine-day-camp", "river-paddlers"]
    );
}

#[test]
fn test_late_pickup_under_keyword_policy() {
    let catalog = load_fixtures();
    let state = FilterState {
        require_late_pickup: true,
        ..FilterState::default()
    };
    let keyword = FilterOptions {
        inference: InferencePolicy::Keyword,
        ..FilterOptions::default()
    };

    assert_eq!(
        ids(&filter_entries(catalog.entries(), &state, &keyword)),
        vec!["sunshine-day-camp", "code-camp"]
    );
}

#[test]
fn test_combined_constraints() {
    let catalog = load_fixtures();
    let state = FilterState {
        category: Some("outdoor".to_string()),
        require_financial_aid: true,
        age_max: Some(8),
        ..FilterState::default()
    };

    let filtered = filter_entries(catalog.entries(), &state, &FilterOptions::default());
    assert_eq!(ids(&filtered), vec!["sunshine-day-camp"]);
}

#[test]
fn test_unknown_town_yields_empty_not_error() {
    let catalog = load_fixtures();
    let state = FilterState {
        town: Some("Pelham".to_string()),
        cost_max: Some(1000.0),
        ..FilterState::default()
    };

    assert!(filter_entries(catalog.entries(), &state, &FilterOptions::default()).is_empty());
}
