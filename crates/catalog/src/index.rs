//! Catalog loading and indexing logic.
//!
//! Builds the immutable `Catalog` snapshot from the three data files:
//! - Parse camps, categories and regions in parallel
//! - Build the id lookup indices
//! - Validate the snapshot before handing it out

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the whole dataset from a directory
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse all three files (camps, categories, regions) in parallel
    /// 2. Build the lookup indices
    /// 3. Validate data integrity
    ///
    /// The load is all-or-nothing: if any file is missing or malformed the
    /// error is returned and nothing is built.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading camp data from {:?}", data_dir);

        let camps_path = data_dir.join(parser::CAMPS_FILE);
        let categories_path = data_dir.join(parser::CATEGORIES_FILE);
        let regions_path = data_dir.join(parser::REGIONS_FILE);

        // Nested joins give three-way parallelism
        let ((camps, categories), regions) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_camps(&camps_path),
                    || parser::parse_categories(&categories_path),
                )
            },
            || parser::parse_regions(&regions_path),
        );

        let camps = camps?;
        let categories = categories?;
        let regions = regions?;

        let catalog = Catalog::from_parts(camps.entries, categories, regions, camps.last_updated);
        catalog.validate()?;

        let (entries, categories) = catalog.counts();
        info!("Loaded {} camps and {} categories", entries, categories);
        Ok(catalog)
    }

    /// Build the id -> position indices. The first occurrence of an id wins.
    pub(crate) fn build_indices(&mut self) {
        self.entry_index.clear();
        for (pos, entry) in self.entries.iter().enumerate() {
            self.entry_index.entry(entry.id.clone()).or_insert(pos);
        }

        self.category_index.clear();
        for (pos, category) in self.categories.iter().enumerate() {
            self.category_index.entry(category.id.clone()).or_insert(pos);
        }
    }

    /// Validate data integrity
    ///
    /// Duplicate camp ids are an error. Inverted age ranges and unknown
    /// category references are data-quality issues: they are logged and the
    /// catalog is still usable.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(DataLoadError::DuplicateId {
                    id: entry.id.clone(),
                });
            }

            if let (Some(min), Some(max)) = (entry.ages.min, entry.ages.max) {
                if min > max {
                    warn!(camp = %entry.id, min, max, "age range is inverted");
                }
            }

            for category in &entry.categories {
                if self.get_category(category).is_none() {
                    warn!(camp = %entry.id, category = %category, "unknown category id");
                }
            }
        }
        Ok(())
    }
}
