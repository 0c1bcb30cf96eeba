//! Report command implementation

use crate::cli::LogLevel;
use crate::config::ReportArgs;
use crate::label::{LabelSet, TruthPolicy};
use crate::metrics::{classification_report, confusion_matrix};
use crate::score::read_labels;

pub fn run_report(args: ReportArgs, level: LogLevel) -> Result<(), String> {
    let policy = TruthPolicy::new(args.positive.as_str());
    let labels = LabelSet::binary();

    let golds = read_labels(&args.golds, &policy)
        .map_err(|e| format!("Failed to read {}: {e}", args.golds.display()))?;
    let predicts = read_labels(&args.predicts, &policy)
        .map_err(|e| format!("Failed to read {}: {e}", args.predicts.display()))?;

    if golds.len() != predicts.len() {
        return Err(format!(
            "Length mismatch: {} gold labels vs {} predictions",
            golds.len(),
            predicts.len()
        ));
    }

    let y_true = labels
        .indices(&golds)
        .map_err(|e| format!("Gold labels: {e}"))?;
    let y_pred = labels
        .indices(&predicts)
        .map_err(|e| format!("Predictions: {e}"))?;

    level.emit(
        LogLevel::Verbose,
        &format!("Comparing {} label pairs", y_true.len()),
    );

    println!("{}", confusion_matrix(&y_pred, &y_true, labels.len()));
    println!("{}", classification_report(&y_pred, &y_true, &labels));
    Ok(())
}
