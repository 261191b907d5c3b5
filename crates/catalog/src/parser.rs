//! Parser for the camp data files.
//!
//! Three JSON payloads make up the dataset:
//! - camps.json: `{ "lastUpdated": "...", "camps": [ ... ] }`
//! - categories.json: `{ "categories": [ { "id": "...", "name": "..." } ] }`
//! - regions.json: opaque, carried through as a `serde_json::Value`
//!
//! This is the only place defaults are substituted. The raw structs mirror
//! the JSON with everything optional; `build_entry` turns one raw camp into
//! an `Entry` whose optional fields are explicit. Ages, weekly cost and the
//! financial-aid flag are read as untyped JSON so a badly typed value only
//! costs that one field (logged, then treated as absent), never the load.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

pub const CAMPS_FILE: &str = "camps.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const REGIONS_FILE: &str = "regions.json";

/// Parsed contents of camps.json
#[derive(Debug)]
pub struct CampsPayload {
    pub last_updated: Option<String>,
    pub entries: Vec<Entry>,
}

// =============================================================================
// Raw JSON shapes
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCampsFile {
    last_updated: Option<String>,
    camps: Option<Vec<RawCamp>>,
}

#[derive(Debug, Deserialize)]
struct RawCategoriesFile {
    categories: Option<Vec<Category>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCamp {
    id: Option<String>,
    name: Option<String>,
    organization: Option<String>,
    description: Option<String>,
    ages: Option<RawAges>,
    location: Option<RawLocation>,
    cost: Option<RawCost>,
    category: Option<Vec<String>>,
    dates: Option<RawDates>,
    registration: Option<RawRegistration>,
    source: Option<RawSource>,
    incomplete: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAges {
    min: Option<Value>,
    max: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    town: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCost {
    per_week: Option<Value>,
    financial_aid: Option<Value>,
    notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDates {
    hours: Option<String>,
    extended_care: Option<String>,
    weeks: Option<Vec<String>>,
    session_length: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRegistration {
    opens: Option<String>,
    deadline: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSource {
    url: Option<String>,
    last_verified: Option<String>,
}

// =============================================================================
// File-level parsing
// =============================================================================

/// Read a whole data file, mapping a missing file to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn json_error(file: &str) -> impl FnOnce(serde_json::Error) -> DataLoadError + '_ {
    move |source| DataLoadError::Json {
        file: file.to_string(),
        source,
    }
}

/// Parse the camps.json file
pub fn parse_camps(path: &Path) -> Result<CampsPayload> {
    parse_camps_str(&read_file(path)?)
}

/// Parse the body of camps.json
pub fn parse_camps_str(json: &str) -> Result<CampsPayload> {
    let raw: RawCampsFile = serde_json::from_str(json).map_err(json_error(CAMPS_FILE))?;

    let entries = raw
        .camps
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(record, camp)| build_entry(record, camp))
        .collect::<Result<Vec<_>>>()?;

    Ok(CampsPayload {
        last_updated: clean(raw.last_updated),
        entries,
    })
}

/// Parse the categories.json file
pub fn parse_categories(path: &Path) -> Result<Vec<Category>> {
    parse_categories_str(&read_file(path)?)
}

pub fn parse_categories_str(json: &str) -> Result<Vec<Category>> {
    let raw: RawCategoriesFile =
        serde_json::from_str(json).map_err(json_error(CATEGORIES_FILE))?;
    Ok(raw.categories.unwrap_or_default())
}

/// Parse the regions.json file. The contents are not interpreted.
pub fn parse_regions(path: &Path) -> Result<serde_json::Value> {
    parse_regions_str(&read_file(path)?)
}

pub fn parse_regions_str(json: &str) -> Result<serde_json::Value> {
    serde_json::from_str(json).map_err(json_error(REGIONS_FILE))
}

// =============================================================================
// Record-level conversion
// =============================================================================

/// Drop a string that is empty or only whitespace. Kept values are not
/// trimmed, so town and category filters compare against the source text.
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn clean_list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| clean(Some(value)))
        .collect()
}

/// Parse a session start date ("2026-07-06")
///
/// Only the canonical zero-padded form is accepted, so matching on the
/// parsed date is the same as matching on the source string.
fn parse_week(raw: &str) -> Result<NaiveDate> {
    let invalid = || DataLoadError::InvalidValue {
        field: "dates.weeks".to_string(),
        value: raw.to_string(),
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
    if date.format("%Y-%m-%d").to_string() != raw {
        return Err(invalid());
    }
    Ok(date)
}

/// An age bound: a whole number from 0 to 255
fn lenient_age(id: &str, field: &str, value: Option<Value>) -> Option<u8> {
    match value? {
        Value::Null => None,
        Value::Number(n) => match n.as_u64().and_then(|age| u8::try_from(age).ok()) {
            Some(age) => Some(age),
            None => {
                warn!(camp = %id, field, value = %n, "age is not a whole number; treating as unknown");
                None
            }
        },
        other => {
            warn!(camp = %id, field, value = %other, "age is not a number; treating as unknown");
            None
        }
    }
}

/// A weekly price; anything but a finite number is an unknown cost
fn lenient_cost(id: &str, value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Null => None,
        Value::Number(n) => n.as_f64().filter(|price| price.is_finite()),
        other => {
            warn!(camp = %id, field = "cost.perWeek", value = %other, "cost is not a number; treating as unknown");
            None
        }
    }
}

/// The financial-aid flag; anything but `true` is no aid
fn lenient_flag(id: &str, field: &str, value: Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(other) => {
            warn!(camp = %id, field, value = %other, "flag is not a boolean; treating as false");
            false
        }
    }
}

/// Convert one raw camp into an `Entry`
///
/// `record` is the camp's position in the file, used for error context.
fn build_entry(record: usize, raw: RawCamp) -> Result<Entry> {
    let id = clean(raw.id).ok_or_else(|| DataLoadError::ParseError {
        file: CAMPS_FILE.to_string(),
        record,
        reason: "Missing id".to_string(),
    })?;

    let ages = raw.ages.unwrap_or_default();
    let location = raw.location.unwrap_or_default();
    let cost = raw.cost.unwrap_or_default();
    let dates = raw.dates.unwrap_or_default();
    let registration = raw.registration.unwrap_or_default();
    let source = raw.source.unwrap_or_default();

    let weeks = dates
        .weeks
        .unwrap_or_default()
        .iter()
        .map(|week| parse_week(week))
        .collect::<Result<Vec<_>>>()?;

    let age_range = AgeRange {
        min: lenient_age(&id, "ages.min", ages.min),
        max: lenient_age(&id, "ages.max", ages.max),
    };
    let per_week = lenient_cost(&id, cost.per_week);
    let financial_aid = lenient_flag(&id, "cost.financialAid", cost.financial_aid);

    Ok(Entry {
        id,
        name: clean(raw.name).unwrap_or_default(),
        organization: clean(raw.organization),
        description: clean(raw.description),
        ages: age_range,
        location: Location {
            town: clean(location.town),
            address: clean(location.address),
        },
        cost: Cost {
            per_week,
            financial_aid,
            notes: clean(cost.notes),
        },
        categories: clean_list(raw.category),
        schedule: Schedule {
            hours: clean(dates.hours),
            extended_care: clean(dates.extended_care),
            weeks,
            session_length: clean(dates.session_length),
        },
        registration: Registration {
            opens: clean(registration.opens).map(|s| DateOrText::parse(s.trim())),
            deadline: clean(registration.deadline).map(|s| DateOrText::parse(s.trim())),
            url: clean(registration.url),
        },
        source: SourceInfo {
            url: clean(source.url),
            last_verified: clean(source.last_verified).map(|s| DateOrText::parse(s.trim())),
        },
        incomplete: clean_list(raw.incomplete),
    })
}
