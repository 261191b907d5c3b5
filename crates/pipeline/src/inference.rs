//! Attribute inference from free-text schedule fields.
//!
//! The dataset has no structured "early drop-off" or "late pickup" field, so
//! these facets are derived from the `hours` and `extended_care` text. Two
//! policies exist and give different answers on the same text:
//!
//! - **TimeThreshold** (default): pull every AM clock time out of the text and
//!   report early drop-off iff one of them is before 8:30 AM. Late pickup is
//!   not computed.
//! - **Keyword**: match fixed cue words and clock times ("early", "drop-off",
//!   "7:30 am", "after-care", "5:30 pm", ...). Computes both facets, but cue
//!   words also fire on phrases like "early bird discount".
//!
//! Every function here is pure and total. Missing text yields `false`.

use catalog::{Entry, Schedule};
use regex::Regex;
use std::sync::LazyLock;

/// Drop-off before this time (minutes after midnight) counts as early
const EARLY_DROPOFF_CUTOFF: u32 = 8 * 60 + 30;

/// An AM clock time: "7am", "7:45 am", "8 a.m."
static RE_AM_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})(?::(\d{2}))?\s*a\.?m\b").unwrap()
});

/// Any PM clock time; group 1 is the hour
static RE_PM_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}):?(\d{2})?\s*pm").unwrap()
});

static RE_EARLY_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"early|before|pre-camp|pre-program|drop.?off|[67]:\d{2}\s*am|8:00\s*am|8:15\s*am",
    )
    .unwrap()
});

static RE_LATE_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[56]:\d{2}\s*pm|1[78]:\d{2}|after.?care|post.?camp|late").unwrap()
});

/// How derived schedule facets are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InferencePolicy {
    /// Numeric comparison of extracted AM times against 8:30 AM
    #[default]
    TimeThreshold,
    /// Cue-word and clock-time pattern matching
    Keyword,
}

impl InferencePolicy {
    /// Whether this policy computes the late-pickup facet at all
    pub fn infers_late_pickup(self) -> bool {
        matches!(self, InferencePolicy::Keyword)
    }

    /// Early drop-off facet for a schedule
    pub fn early_dropoff(self, schedule: &Schedule) -> bool {
        has_early_dropoff(
            self,
            schedule.extended_care.as_deref(),
            schedule.hours.as_deref(),
        )
    }

    /// Late pickup facet for a schedule; `None` if the policy does not
    /// compute it
    pub fn late_pickup(self, schedule: &Schedule) -> Option<bool> {
        has_late_pickup(
            self,
            schedule.extended_care.as_deref(),
            schedule.hours.as_deref(),
        )
    }
}

/// Case-folded `extended_care + " " + hours`
fn combined_text(extended_care: Option<&str>, hours: Option<&str>) -> String {
    format!(
        "{} {}",
        extended_care.unwrap_or_default(),
        hours.unwrap_or_default()
    )
    .to_lowercase()
}

/// Decide whether a camp offers early drop-off
pub fn has_early_dropoff(
    policy: InferencePolicy,
    extended_care: Option<&str>,
    hours: Option<&str>,
) -> bool {
    let text = combined_text(extended_care, hours);
    match policy {
        InferencePolicy::TimeThreshold => am_times(&text)
            .into_iter()
            .any(|(hour, minute)| hour * 60 + minute < EARLY_DROPOFF_CUTOFF),
        InferencePolicy::Keyword => RE_EARLY_CUES.is_match(&text),
    }
}

/// Decide whether a camp offers late pickup
///
/// Only the keyword policy computes this; the time-threshold policy returns
/// `None`.
pub fn has_late_pickup(
    policy: InferencePolicy,
    extended_care: Option<&str>,
    hours: Option<&str>,
) -> Option<bool> {
    match policy {
        InferencePolicy::TimeThreshold => None,
        InferencePolicy::Keyword => {
            let text = combined_text(extended_care, hours);
            // "12 pm" parses as hour 12, outside 5..=11
            let evening_time = pm_hours(&text).into_iter().any(|hour| (5..12).contains(&hour));
            Some(evening_time || RE_LATE_CUES.is_match(&text))
        }
    }
}

/// Every AM time in the text as (hour, minute)
fn am_times(text: &str) -> Vec<(u32, u32)> {
    RE_AM_TIME
        .captures_iter(text)
        .filter_map(|cap| {
            let hour = cap[1].parse().ok()?;
            let minute = match cap.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            };
            Some((hour, minute))
        })
        .collect()
}

/// The hour of every PM time in the text
fn pm_hours(text: &str) -> Vec<u32> {
    RE_PM_TIME
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}

/// Derived booleans shown as badges next to a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFacets {
    pub early_dropoff: bool,
    /// `None` when the policy does not compute late pickup
    pub late_pickup: Option<bool>,
    /// Read straight from the structured cost field
    pub financial_aid: bool,
}

impl DerivedFacets {
    pub fn infer(policy: InferencePolicy, entry: &Entry) -> Self {
        Self {
            early_dropoff: policy.early_dropoff(&entry.schedule),
            late_pickup: policy.late_pickup(&entry.schedule),
            financial_aid: entry.cost.financial_aid,
        }
    }
}
