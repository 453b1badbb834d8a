//! In-memory accumulation of every translatable string found during a run.
//!
//! Layout: entity type (registration order) → category (sorted) → entity
//! name (first-seen order) → [`Description`].

use std::collections::{BTreeMap, HashMap};

/// Description payload stored for one entity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Description {
    #[default]
    None,
    Single(String),
    /// Same name seen several times with differing descriptions, in encounter order.
    Multiple(Vec<String>),
}

impl Description {
    pub fn from_captured(captured: Option<String>) -> Self {
        match captured {
            Some(text) => Description::Single(text),
            None => Description::None,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Description::None => &[],
            Description::Single(text) => std::slice::from_ref(text),
            Description::Multiple(texts) => texts,
        }
    }

    /// Normalizes to the list form and appends `text`.
    pub fn append(&mut self, text: String) {
        let mut texts = match std::mem::take(self) {
            Description::None => Vec::new(),
            Description::Single(existing) => vec![existing],
            Description::Multiple(existing) => existing,
        };
        texts.push(text);
        *self = Description::Multiple(texts);
    }
}

/// A closed record produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub description: Option<String>,
}

/// Entities of one category, iterated in the order names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    entries: Vec<(String, Description)>,
    index: HashMap<String, usize>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Description> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Description)> {
        self.entries.iter().map(|(name, desc)| (name.as_str(), desc))
    }

    /// Merges one closed record.
    ///
    /// A new name is stored as-is. A known name gains the captured description
    /// as an additional variant; without a captured description it is left
    /// untouched.
    pub fn merge(&mut self, record: Record) {
        match self.index.get(&record.name) {
            Some(&i) => {
                if let Some(text) = record.description {
                    self.entries[i].1.append(text);
                }
            }
            None => {
                self.index.insert(record.name.clone(), self.entries.len());
                self.entries
                    .push((record.name, Description::from_captured(record.description)));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSection {
    pub name: String,
    pub categories: BTreeMap<String, Category>,
}

/// The aggregate handed from parsing to export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<TypeSection>,
}

impl Catalog {
    /// Creates a catalog with one empty section per type, in the given order.
    pub fn new<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = type_names
            .into_iter()
            .map(|name| TypeSection {
                name: name.into(),
                categories: BTreeMap::new(),
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[TypeSection] {
        &self.sections
    }

    /// Category map for `(type_name, category)`, created on first access.
    ///
    /// An unregistered type gets a new section appended at the end.
    pub fn category_mut(&mut self, type_name: &str, category: &str) -> &mut Category {
        let pos = match self.sections.iter().position(|s| s.name == type_name) {
            Some(pos) => pos,
            None => {
                self.sections.push(TypeSection {
                    name: type_name.to_string(),
                    categories: BTreeMap::new(),
                });
                self.sections.len() - 1
            }
        };
        self.sections[pos]
            .categories
            .entry(category.to_string())
            .or_default()
    }

    pub fn category(&self, type_name: &str, category: &str) -> Option<&Category> {
        self.sections
            .iter()
            .find(|s| s.name == type_name)
            .and_then(|s| s.categories.get(category))
    }
}
