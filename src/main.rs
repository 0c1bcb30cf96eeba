//! Evaluar CLI
//!
//! Submission-scoring entry point for the evaluar library.
//!
//! # Usage
//!
//! ```bash
//! # Score a prediction file against gold labels
//! evaluar score data/gold.csv submissions/predictions.csv
//!
//! # JSON output
//! evaluar score data/gold.csv submissions/predictions.csv --format json
//!
//! # Per-class report with confusion matrix
//! evaluar report data/gold.csv submissions/predictions.csv
//!
//! # Different positive-class literal in the label column
//! evaluar score gold.csv predictions.csv --positive yes
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
