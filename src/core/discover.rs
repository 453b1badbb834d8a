use walkdir::WalkDir;

use crate::config::{CATEGORY_EXTENSION, EntityType, ProjectLayout};
use crate::error::{Result, TemplateError};
use crate::report::Reporter;

/// Lists the categories of `entity_type` that should be translated.
///
/// Categories are the stems of `*.xml` files directly inside the type's
/// configuration directory, sorted, minus the type's excluded categories.
/// A directory that exists but cannot be listed is fatal.
pub fn discover_categories(
    layout: &ProjectLayout,
    entity_type: &EntityType,
    reporter: &mut impl Reporter,
) -> Result<Vec<String>> {
    let type_dir = layout.type_dir(entity_type);

    let mut categories: Vec<String> = if type_dir.is_dir() {
        let mut stems = Vec::new();
        for entry in WalkDir::new(&type_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| TemplateError::read(&type_dir, e.into()))?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(stem) = category_stem(entry.file_name().to_str()) {
                stems.push(stem.to_string());
            }
        }
        stems
    } else {
        reporter.warning(&format!(
            "'{}' directory not found, excluding from translations template",
            type_dir.display()
        ));
        Vec::new()
    };

    categories.sort();
    categories.retain(|category| !entity_type.is_excluded(category));

    if categories.is_empty() {
        reporter.warning(&format!(
            "no '{}' categories found, excluding from translation template",
            entity_type.name
        ));
    }

    Ok(categories)
}

fn category_stem(file_name: Option<&str>) -> Option<&str> {
    file_name?
        .strip_suffix(CATEGORY_EXTENSION)?
        .strip_suffix('.')
}
