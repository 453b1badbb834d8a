use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::args::Arguments;
use super::report::ConsoleReporter;
use crate::config::{Config, ProjectLayout, find_project_root};
use crate::core::build_template;

/// Builds the template for the resolved project root.
///
/// The working directory is switched to the root first, so relative paths
/// behave the same no matter where the tool was started from.
pub fn run(Arguments { root }: Arguments) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let root = resolve_root(root, &cwd)?;

    env::set_current_dir(&root)
        .with_context(|| format!("Failed to enter project root '{}'", root.display()))?;

    let layout = ProjectLayout::new(&root);
    let mut reporter = ConsoleReporter;
    let path = build_template(&Config::default(), &layout, &mut reporter)?;

    Ok(path)
}

/// Picks the explicit root if given, otherwise searches upward from `cwd`.
///
/// Falls back to `cwd` when no ancestor holds a configuration directory; the
/// missing directories are then reported by the pipeline itself.
pub fn resolve_root(explicit: Option<PathBuf>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(root) => {
            let root = if root.is_absolute() { root } else { cwd.join(root) };
            if !root.is_dir() {
                bail!("Project root '{}' is not a directory.", root.display());
            }
            Ok(root)
        }
        None => Ok(find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf())),
    }
}
