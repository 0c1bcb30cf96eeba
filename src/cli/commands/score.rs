//! Score command implementation

use crate::cli::LogLevel;
use crate::config::{OutputFormat, ScoreArgs};
use crate::label::TruthPolicy;
use crate::score::{FileScorer, Scores};

/// Render scores in the requested output format.
pub fn format_scores(scores: &Scores, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(scores.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(scores)
            .map_err(|e| format!("JSON encoding failed: {e}")),
    }
}

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<(), String> {
    level.emit(
        LogLevel::Verbose,
        &format!("Gold file: {}", args.golds.display()),
    );
    level.emit(
        LogLevel::Verbose,
        &format!("Prediction file: {}", args.predicts.display()),
    );

    let scorer = FileScorer::new().with_policy(TruthPolicy::new(args.positive.as_str()));
    let scores = scorer
        .score_files(&args.golds, &args.predicts)
        .map_err(|e| format!("Scoring failed: {e}"))?;

    level.emit(
        LogLevel::Verbose,
        &format!("Scored {} examples", scores.examples),
    );

    println!("{}", format_scores(&scores, args.format)?);
    Ok(())
}
