//! Line-oriented extraction of name/description records.
//!
//! This is deliberately not a markup parser. Lines are trimmed and matched by
//! prefix, so partial or malformed markup degrades to "line ignored" instead
//! of an error.

use std::{fs, io};

use crate::config::{EntityType, ProjectLayout};
use crate::core::catalog::{Catalog, Record};
use crate::error::{Result, TemplateError};
use crate::report::Reporter;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const DESCRIPTION_OPEN: &str = "<description>";
const DESCRIPTION_CLOSE: &str = "</description>";

/// Rewrites `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scanner state carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    in_comment: bool,
    pending_name: Option<String>,
    pending_description: Option<String>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn in_comment(&self) -> bool {
        self.in_comment
    }

    #[cfg(test)]
    fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }

    /// Feeds one raw line and returns the record it closes, if any.
    pub fn feed(&mut self, line: &str, tag: &str) -> Option<Record> {
        let line = line.trim();

        // A line closing a comment is consumed whole, including anything after `-->`.
        if self.in_comment && line.contains(COMMENT_CLOSE) {
            self.in_comment = false;
            return None;
        }
        if !self.in_comment {
            self.in_comment = line.starts_with(COMMENT_OPEN) && !line.contains(COMMENT_CLOSE);
        }
        if self.in_comment {
            return None;
        }

        if let Some(rest) = line.strip_prefix(&record_open_prefix(tag)) {
            let name = rest.split('"').next().unwrap_or_default().trim();
            self.pending_name = (!name.is_empty()).then(|| name.to_string());
            return None;
        }

        if self.pending_name.is_none() {
            return None;
        }

        if let Some(rest) = line.strip_prefix(DESCRIPTION_OPEN) {
            let text = rest.strip_suffix(DESCRIPTION_CLOSE).unwrap_or(rest).trim();
            self.pending_description = (!text.is_empty()).then(|| text.to_string());
            return None;
        }

        if line == record_close(tag) {
            let name = self.pending_name.take()?;
            return Some(Record {
                name,
                description: self.pending_description.take(),
            });
        }

        None
    }
}

fn record_open_prefix(tag: &str) -> String {
    format!("<{} name=\"", tag)
}

fn record_close(tag: &str) -> String {
    format!("</{}>", tag)
}

/// Scans `content` and returns every closed record in file order.
pub fn scan_records(content: &str, tag: &str) -> Vec<Record> {
    let content = normalize_line_endings(content);
    let mut scanner = Scanner::new();
    content
        .split('\n')
        .filter_map(|line| scanner.feed(line, tag))
        .collect()
}

/// Parses one category file and merges its records into `catalog`.
///
/// A missing file is reported as a warning and leaves the catalog untouched.
pub fn parse_category(
    layout: &ProjectLayout,
    entity_type: &EntityType,
    category: &str,
    catalog: &mut Catalog,
    reporter: &mut impl Reporter,
) -> Result<()> {
    reporter.progress(&format!(
        "parsing {} names and descriptions from category '{}'",
        entity_type.name, category
    ));

    let type_dir = layout.type_dir(entity_type);
    if !type_dir.is_dir() {
        reporter.warning(&format!(
            "'{}' directory not found, excluding from translations template",
            type_dir.display()
        ));
        return Ok(());
    }

    let path = layout.category_file(entity_type, category);
    if !path.is_file() {
        reporter.warning(&format!(
            "'{}' file not found, excluding from translation template",
            path.display()
        ));
        return Ok(());
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            reporter.warning(&format!(
                "'{}' file not found, excluding from translation template",
                path.display()
            ));
            return Ok(());
        }
        Err(e) => return Err(TemplateError::read(&path, e)),
    };

    let records = scan_records(&content, entity_type.tag());
    let target = catalog.category_mut(&entity_type.name, category);
    for record in records {
        target.merge(record);
    }

    Ok(())
}
