//! CLI command implementations

mod report;
mod score;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Score(args) => score::run_score(args, level),
        Command::Report(args) => report::run_report(args, level),
    }
}
