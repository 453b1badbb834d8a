//! CLI argument definitions using clap.
//!
//! The tool has a single job and no subcommands. The only option selects the
//! project root; without it the root is discovered from the current directory.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root containing data/conf and data/languages
    /// (default: nearest ancestor of the current directory with data/conf)
    #[arg(long, env = "LOCALE_TEMPLATE_ROOT")]
    pub root: Option<PathBuf>,
}
