//! Classification report functions

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::multiclass::MultiClassMetrics;
use crate::label::LabelSet;

/// Compute a confusion matrix from parallel class-index sequences.
///
/// Element `[i][j]` is the count of true class `i` predicted as `j`; the
/// class space is fixed by `n_classes`.
#[must_use]
pub fn confusion_matrix(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> ConfusionMatrix {
    ConfusionMatrix::from_indices(y_pred, y_true, n_classes)
}

/// Generate an sklearn-style classification report.
///
/// One row per label token (in set order), then macro and weighted
/// averages and overall accuracy.
#[must_use]
pub fn classification_report(y_pred: &[usize], y_true: &[usize], labels: &LabelSet) -> String {
    let cm = ConfusionMatrix::from_indices(y_pred, y_true, labels.len());
    let metrics = MultiClassMetrics::from_confusion_matrix(&cm);

    let mut report = String::new();

    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(54));
    report.push('\n');

    for (class, token) in labels.iter().enumerate() {
        report.push_str(&format!(
            "{token:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            metrics.precision[class], metrics.recall[class], metrics.f1[class],
            metrics.support[class]
        ));
    }

    report.push_str(&"-".repeat(54));
    report.push('\n');

    let total_support: usize = metrics.support.iter().sum();

    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "macro avg",
        metrics.precision_avg(Average::Macro),
        metrics.recall_avg(Average::Macro),
        metrics.f1_avg(Average::Macro),
        total_support
    ));

    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "weighted avg",
        metrics.precision_avg(Average::Weighted),
        metrics.recall_avg(Average::Weighted),
        metrics.f1_avg(Average::Weighted),
        total_support
    ));

    report.push_str(&format!("\nAccuracy: {:.4}\n", cm.accuracy()));

    report
}
