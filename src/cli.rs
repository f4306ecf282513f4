//! Command-line front end.

use crate::{parser, report, solver};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(about = "Optimizes machine counts for a factory's recipes and production demands")]
pub struct Cli {
    /// Problem file listing the available recipes and the demanded rates
    #[clap(value_parser)]
    file: PathBuf,
    /// Print the solution as JSON instead of tables
    #[clap(long, action)]
    json: bool,
}

impl Cli {
    pub fn run(self) -> ExitCode {
        let source = match std::fs::read_to_string(&self.file) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("Failed to read {}: {error}", self.file.display());
                return ExitCode::FAILURE;
            }
        };
        let problem = match parser::parse_problem(&source) {
            Ok(problem) => problem,
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        };
        let solution = match solver::solve(&problem) {
            Some(solution) => solution,
            None => {
                eprintln!("A solution could not be found. Is a recipe missing?");
                return ExitCode::FAILURE;
            }
        };
        if self.json {
            println!("{}", report::to_json(&solution));
        } else {
            println!("{}", report::render(&problem, &solution));
        }
        ExitCode::SUCCESS
    }
}
