use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::config::ProjectLayout;
use crate::core::catalog::Catalog;
use crate::error::{Result, TemplateError};
use crate::report::Reporter;

/// Header placed at the top of every generated template.
pub const TEMPLATE_HEADER: [&str; 5] = [
    "",
    "##",
    "## Language: <name> (<code>)",
    "## Translators: <translator1>[, <translator2>...]",
    "##",
];

/// Renders `catalog` in the translator template layout.
///
/// Empty categories are skipped with a warning. Every key line ends with a
/// bare `=` so translators only have to fill in the value.
pub fn render_template(catalog: &Catalog, reporter: &mut impl Reporter) -> String {
    let mut out = TEMPLATE_HEADER.join("\n");
    out.push('\n');

    for section in catalog.sections() {
        out.push_str(&format!("\n\n# {} names and descriptions", section.name));

        for (category_name, category) in &section.categories {
            if category.is_empty() {
                reporter.warning(&format!(
                    "'{}' category '{}' is empty, skipping",
                    section.name, category_name
                ));
                continue;
            }

            out.push_str(&format!("\n\n## {}\n", category_name));

            for (name, description) in category.iter() {
                out.push_str(&format!("\n{}=\n", name));
                for text in description.as_slice() {
                    out.push_str(&format!("{}=\n", text));
                }
            }
        }
    }

    out
}

/// Renders `catalog` and writes it to the layout's template file.
///
/// Returns the path written.
pub fn export_template(
    layout: &ProjectLayout,
    catalog: &Catalog,
    reporter: &mut impl Reporter,
) -> Result<PathBuf> {
    let languages_dir = layout.languages_dir();
    if !languages_dir.is_dir() {
        return Err(TemplateError::MissingDirectory(languages_dir));
    }

    let path = layout.template_file();
    let file = File::create(&path).map_err(|e| TemplateError::write(&path, e))?;

    let content = render_template(catalog, reporter);
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| TemplateError::write(&path, e))?;

    Ok(path)
}
