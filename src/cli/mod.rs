use anyhow::Result;

use crate::cli::report::print_exported;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::print_error;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let path = run::run(args)?;
    print_exported(&path);

    Ok(ExitStatus::Success)
}
