use std::path::{Path, PathBuf};

/// Configuration directory, relative to the project root.
pub const CONF_DIR: &str = "data/conf";

/// Output directory for language files, relative to the project root.
pub const LANGUAGES_DIR: &str = "data/languages";

pub const TEMPLATE_FILE_NAME: &str = "template.txt";

/// Extension of category configuration files (without the dot).
pub const CATEGORY_EXTENSION: &str = "xml";

/// A translatable entity type and the categories that are never translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub name: String,
    pub excluded_categories: Vec<String>,
}

impl EntityType {
    pub fn new(name: &str, excluded_categories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            excluded_categories: excluded_categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Record tag used inside this type's configuration files.
    ///
    /// ```
    /// use locale_template::config::EntityType;
    ///
    /// assert_eq!(EntityType::new("items", &[]).tag(), "item");
    /// assert_eq!(EntityType::new("creatures", &[]).tag(), "creature");
    /// assert_eq!(EntityType::new("zone", &[]).tag(), "zone");
    /// ```
    pub fn tag(&self) -> &str {
        self.name.strip_suffix('s').unwrap_or(&self.name)
    }

    pub fn is_excluded(&self, category: &str) -> bool {
        self.excluded_categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entity types in registration order. Output sections follow this order.
    pub entity_types: Vec<EntityType>,
}

fn default_entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new("items", &["dummy_weapons", "meta"]),
        EntityType::new("creatures", &[]),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entity_types: default_entity_types(),
        }
    }
}

/// Paths the tool reads from and writes to, all derived from the project root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn conf_dir(&self) -> PathBuf {
        self.root.join(CONF_DIR)
    }

    pub fn type_dir(&self, entity_type: &EntityType) -> PathBuf {
        self.conf_dir().join(&entity_type.name)
    }

    pub fn category_file(&self, entity_type: &EntityType, category: &str) -> PathBuf {
        self.type_dir(entity_type)
            .join(format!("{}.{}", category, CATEGORY_EXTENSION))
    }

    pub fn languages_dir(&self) -> PathBuf {
        self.root.join(LANGUAGES_DIR)
    }

    pub fn template_file(&self) -> PathBuf {
        self.languages_dir().join(TEMPLATE_FILE_NAME)
    }
}

/// Walks up from `start_dir` to the first directory holding [`CONF_DIR`].
///
/// The search stops at a `.git` boundary so a nested checkout never picks up
/// an unrelated parent project.
pub fn find_project_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if current.join(CONF_DIR).is_dir() {
            return Some(current);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}
