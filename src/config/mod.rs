//! Configuration and CLI argument types

mod cli;

pub use cli::{Cli, Command, OutputFormat, ReportArgs, ScoreArgs};
