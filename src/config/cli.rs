//! CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Evaluar: Submission Scoring & Inference Harness
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Evaluation harness for binary text classification: accuracy/macro-F1 over submission files"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score a prediction file against a gold file
    Score(ScoreArgs),

    /// Print a per-class classification report for a file pair
    Report(ReportArgs),
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Path to the gold (ground-truth) CSV file
    #[arg(value_name = "GOLDS")]
    pub golds: PathBuf,

    /// Path to the prediction CSV file
    #[arg(value_name = "PREDICTS")]
    pub predicts: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Positive-class literal in the label column
    #[arg(long, default_value = "True")]
    pub positive: String,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Path to the gold (ground-truth) CSV file
    #[arg(value_name = "GOLDS")]
    pub golds: PathBuf,

    /// Path to the prediction CSV file
    #[arg(value_name = "PREDICTS")]
    pub predicts: PathBuf,

    /// Positive-class literal in the label column
    #[arg(long, default_value = "True")]
    pub positive: String,
}

/// Output format for the score command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from(["evaluar", "score", "gold.csv", "pred.csv"])
            .expect("valid arguments");
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.golds, PathBuf::from("gold.csv"));
                assert_eq!(args.predicts, PathBuf::from("pred.csv"));
                assert_eq!(args.format, OutputFormat::Text);
                assert_eq!(args.positive, "True");
            }
            other => panic!("expected score command, got {other:?}"),
        }
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_score_json_format() {
        let cli = Cli::try_parse_from([
            "evaluar", "score", "gold.csv", "pred.csv", "--format", "json",
        ])
        .expect("valid arguments");
        match cli.command {
            Command::Score(args) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_command_with_positive_literal() {
        let cli = Cli::try_parse_from([
            "evaluar", "report", "gold.csv", "pred.csv", "--positive", "yes",
        ])
        .expect("valid arguments");
        match cli.command {
            Command::Report(args) => assert_eq!(args.positive, "yes"),
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["evaluar", "score", "g.csv", "p.csv", "--verbose"])
            .expect("valid arguments");
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_predicts_is_an_error() {
        assert!(Cli::try_parse_from(["evaluar", "score", "gold.csv"]).is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text"), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
