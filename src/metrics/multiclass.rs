//! Per-class precision, recall, and F1 with averaging

use super::average::Average;
use super::confusion::ConfusionMatrix;

/// Per-class classification metrics over a fixed class space.
#[derive(Clone, Debug)]
pub struct MultiClassMetrics {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count of true instances)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    total_tp: usize,
    total_fp: usize,
    total_fn: usize,
}

impl MultiClassMetrics {
    /// Compute metrics from a confusion matrix.
    #[must_use]
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);
        let (mut total_tp, mut total_fp, mut total_fn) = (0, 0, 0);

        for class in 0..n_classes {
            let tp = cm.true_positives(class);
            let fp = cm.false_positives(class);
            let fn_ = cm.false_negatives(class);
            total_tp += tp;
            total_fp += fp;
            total_fn += fn_;

            let p = ratio(tp, tp + fp);
            let r = ratio(tp, tp + fn_);
            let f = harmonic(p, r);

            precision.push(p);
            recall.push(r);
            f1.push(f);
            support.push(cm.support(class));
        }

        Self {
            precision,
            recall,
            f1,
            support,
            n_classes,
            total_tp,
            total_fp,
            total_fn,
        }
    }

    /// Compute from parallel class-index sequences.
    #[must_use]
    pub fn from_indices(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Self {
        let cm = ConfusionMatrix::from_indices(y_pred, y_true, n_classes);
        Self::from_confusion_matrix(&cm)
    }

    /// Averaged precision.
    #[must_use]
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro_precision(),
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Averaged recall.
    #[must_use]
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro_recall(),
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Averaged F1.
    #[must_use]
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => harmonic(self.micro_precision(), self.micro_recall()),
            _ => self.average_metric(&self.f1, average),
        }
    }

    fn micro_precision(&self) -> f64 {
        ratio(self.total_tp, self.total_tp + self.total_fp)
    }

    fn micro_recall(&self) -> f64 {
        ratio(self.total_tp, self.total_tp + self.total_fn)
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro | Average::None => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Average::Weighted => {
                let total_support: usize = self.support.iter().sum();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
            Average::Micro => unreachable!("micro handled by the *_avg methods"),
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den > 0 {
        num as f64 / den as f64
    } else {
        0.0
    }
}

fn harmonic(p: f64, r: f64) -> f64 {
    if p + r > 0.0 {
        2.0 * p * r / (p + r)
    } else {
        0.0
    }
}
