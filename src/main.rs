use std::process::ExitCode;

use clap::Parser;
use locale_template::cli::{Arguments, ExitStatus, print_error};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also arrive here and print to stdout.
            let _ = err.print();
            return if err.use_stderr() {
                ExitStatus::Error.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    match locale_template::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::from(&err).into()
        }
    }
}
