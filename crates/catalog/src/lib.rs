//! # Catalog Crate
//!
//! This crate loads and indexes the static camp dataset.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Entry and its field groups, Category, Catalog)
//! - **parser**: Turn the JSON payloads into Rust structs, substituting defaults
//! - **index**: Load the three files in parallel and build the lookup indices
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//!
//! let camp = catalog.get_entry("sunshine-day-camp").unwrap();
//! println!("{} runs {} sessions", camp.name, camp.schedule.weeks.len());
//! ```
//!
//! The catalog is written once at load time and read-only afterwards, so it
//! can be shared freely by reference.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    EntryId,
    CategoryId,
    // Core types
    Entry,
    AgeRange,
    Location,
    Cost,
    Schedule,
    Registration,
    SourceInfo,
    DateOrText,
    Category,
    Catalog,
};
