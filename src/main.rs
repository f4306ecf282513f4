use clap::Parser;
use flp::cli::Cli;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    match Cli::try_parse() {
        Ok(cli) => cli.run(),
        Err(error) => {
            // --help and --version print to stdout and succeed; anything
            // else is a usage error.
            let _ = error.print();
            if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
