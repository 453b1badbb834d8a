//! Template generation pipeline.
//!
//! 1. **Discover**: list the category files of every registered entity type
//! 2. **Parse**: extract name/description records into the [`Catalog`]
//! 3. **Export**: render the catalog once and write the template file

pub mod catalog;
pub mod discover;
pub mod export;
pub mod parser;

use std::path::PathBuf;

pub use catalog::{Catalog, Category, Description, Record};
pub use discover::discover_categories;
pub use export::{export_template, render_template};
pub use parser::{parse_category, scan_records};

use crate::config::{Config, ProjectLayout};
use crate::error::Result;
use crate::report::Reporter;

/// Parses every category of every registered type into a fresh catalog.
pub fn collect_catalog(
    config: &Config,
    layout: &ProjectLayout,
    reporter: &mut impl Reporter,
) -> Result<Catalog> {
    let mut catalog = Catalog::new(config.entity_types.iter().map(|t| t.name.clone()));

    for entity_type in &config.entity_types {
        reporter.progress(&format!("parsing type: {}", entity_type.name));

        for category in discover_categories(layout, entity_type, reporter)? {
            parse_category(layout, entity_type, &category, &mut catalog, reporter)?;
        }
    }

    Ok(catalog)
}

/// Runs the full pipeline and returns the path of the written template.
pub fn build_template(
    config: &Config,
    layout: &ProjectLayout,
    reporter: &mut impl Reporter,
) -> Result<PathBuf> {
    let catalog = collect_catalog(config, layout, reporter)?;
    export_template(layout, &catalog, reporter)
}
