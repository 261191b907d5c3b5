//! Command-line arguments and their conversion into engine inputs.

use catalog::EntryId;
use chrono::{Datelike, NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pipeline::{FilterOptions, FilterState, InferencePolicy, UnknownCostPolicy};
use std::path::PathBuf;

/// Camp Finder - browse and filter local kids' camps
#[derive(Parser, Debug)]
#[command(name = "camp-finder")]
#[command(about = "Browse and filter a directory of kids' camps", long_about = None)]
pub struct Cli {
    /// Directory holding camps.json, categories.json and regions.json
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List camps matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the full details of one camp
    Show {
        /// Camp id
        id: EntryId,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Explain why a camp does or does not match the given filters
    Explain {
        /// Camp id
        id: EntryId,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the towns present in the data
    Towns,

    /// List the camp categories
    Categories,
}

/// Facet constraints. Anything left out is unconstrained.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to look for in name, organization, description or town
    #[arg(short, long)]
    pub search: Option<String>,

    /// Youngest age the camp must accept
    #[arg(long)]
    pub age_min: Option<u8>,

    /// Oldest age the camp must accept
    #[arg(long)]
    pub age_max: Option<u8>,

    /// Exact town name
    #[arg(long)]
    pub town: Option<String>,

    /// Category id (see `categories`)
    #[arg(long)]
    pub category: Option<String>,

    /// Highest weekly cost in dollars
    #[arg(long)]
    pub cost_max: Option<f64>,

    /// Monday of the week needed, as YYYY-MM-DD
    #[arg(long, value_parser = parse_week)]
    pub week: Option<NaiveDate>,

    /// Only camps with early drop-off
    #[arg(long)]
    pub early_dropoff: bool,

    /// Only camps with late pickup (keyword policy only)
    #[arg(long)]
    pub late_pickup: bool,

    /// Only camps offering financial aid
    #[arg(long)]
    pub financial_aid: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// How derived facets and unknown costs are treated
#[derive(Args, Debug, Clone, Copy)]
pub struct PolicyArgs {
    /// How early drop-off / late pickup are inferred from schedule text
    #[arg(long, value_enum, default_value_t = PolicyArg::Time)]
    pub policy: PolicyArg,

    /// Whether camps with no listed price survive a --cost-max filter
    #[arg(long, value_enum, default_value_t = UnknownCostArg::Include)]
    pub unknown_cost: UnknownCostArg,
}

impl Default for PolicyArgs {
    fn default() -> Self {
        Self {
            policy: PolicyArg::Time,
            unknown_cost: UnknownCostArg::Include,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Early drop-off iff an AM time before 8:30 is listed
    Time,
    /// Cue words and clock times; also infers late pickup
    Keyword,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownCostArg {
    Include,
    Exclude,
}

impl PolicyArgs {
    pub fn to_options(self) -> FilterOptions {
        FilterOptions {
            inference: match self.policy {
                PolicyArg::Time => InferencePolicy::TimeThreshold,
                PolicyArg::Keyword => InferencePolicy::Keyword,
            },
            unknown_cost: match self.unknown_cost {
                UnknownCostArg::Include => UnknownCostPolicy::Include,
                UnknownCostArg::Exclude => UnknownCostPolicy::Exclude,
            },
        }
    }
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone(),
            age_min: self.age_min,
            age_max: self.age_max,
            town: self.town.clone(),
            category: self.category.clone(),
            cost_max: self.cost_max,
            week: self.week,
            require_early_dropoff: self.early_dropoff,
            require_late_pickup: self.late_pickup,
            require_financial_aid: self.financial_aid,
        }
    }
}

/// Parse a session week; sessions always start on a Monday
fn parse_week(s: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))?;
    if date.weekday() != Weekday::Mon {
        return Err(format!("{} is a {:?}, not a Monday", date, date.weekday()));
    }
    Ok(date)
}
