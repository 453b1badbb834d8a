//! Console output for the CLI.
//!
//! Progress and warnings go to stdout, fatal errors to stderr. Colors follow
//! the `colored` crate defaults, so `NO_COLOR` disables them.

use std::path::Path;

use colored::Colorize;

use crate::report::Reporter;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Reporter that prints notices to stdout as they happen.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warning(&mut self, message: &str) {
        println!("{}", warning_line(message));
    }
}

fn warning_line(message: &str) -> String {
    format!("{} {}", "warning:".bold().yellow(), message)
}

fn exported_line(path: &Path) -> String {
    format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("template exported to '{}'", path.display()).green()
    )
}

fn error_line(err: &anyhow::Error) -> String {
    format!("{} {:#}", "error:".bold().red(), err)
}

/// Print the confirmation line after the template was written.
pub fn print_exported(path: &Path) {
    println!("{}", exported_line(path));
}

/// Print a fatal error to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", error_line(err));
}
