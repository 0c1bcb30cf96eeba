//! Submission scoring
//!
//! Composes label extraction with the classification metrics to produce
//! accuracy and macro-F1 for a gold/prediction file pair.

use crate::error::{Error, Result};
use crate::label::{LabelSet, TruthPolicy};
use crate::metrics::{Average, ConfusionMatrix, MultiClassMetrics};
use crate::score::submission::read_labels;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Accuracy and macro-F1 for one gold/prediction pair.
#[derive(Debug, Clone, Serialize)]
pub struct Scores {
    /// Fraction of positions where gold and prediction agree
    pub accuracy: f64,
    /// Unweighted mean of per-class F1 over the full label set
    pub f1: f64,
    /// Per-class F1 in label-set order
    pub per_class_f1: Vec<f64>,
    /// Number of scored positions
    pub examples: usize,
}

impl fmt::Display for Scores {
    /// The submission-scoring output line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acc: {}, f1: {}", self.accuracy, self.f1)
    }
}

/// Scorer for submission label files.
///
/// Stateless: every call re-reads its inputs fully, nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct FileScorer {
    labels: LabelSet,
    policy: TruthPolicy,
}

impl FileScorer {
    /// Scorer over the binary label set with the default truth policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the truth policy used when reading submission files.
    #[must_use]
    pub fn with_policy(mut self, policy: TruthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The label set scores are computed over.
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Score two equal-length label sequences.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the sequences differ in length
    /// and `Error::UnknownLabel` if either contains a token outside the
    /// label set.
    pub fn score_labels<S: AsRef<str>>(&self, golds: &[S], predicts: &[S]) -> Result<Scores> {
        if golds.len() != predicts.len() {
            return Err(Error::LengthMismatch {
                golds: golds.len(),
                predicts: predicts.len(),
            });
        }

        let y_true = self.labels.indices(golds)?;
        let y_pred = self.labels.indices(predicts)?;

        let cm = ConfusionMatrix::from_indices(&y_pred, &y_true, self.labels.len());
        let metrics = MultiClassMetrics::from_confusion_matrix(&cm);

        Ok(Scores {
            accuracy: cm.accuracy(),
            f1: metrics.f1_avg(Average::Macro),
            per_class_f1: metrics.f1,
            examples: cm.total(),
        })
    }

    /// Read labels from both files and score them.
    pub fn score_files(
        &self,
        golds: impl AsRef<Path>,
        predicts: impl AsRef<Path>,
    ) -> Result<Scores> {
        let golds = read_labels(golds, &self.policy)?;
        let predicts = read_labels(predicts, &self.policy)?;
        self.score_labels(&golds, &predicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_tokens(bits: &[u8]) -> Vec<String> {
        bits.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_identical_sequences_score_one() {
        let scorer = FileScorer::new();
        let labels = to_tokens(&[1, 0, 1, 0]);
        let scores = scorer.score_labels(&labels, &labels).expect("valid labels");
        assert_eq!(scores.accuracy, 1.0);
        assert_eq!(scores.f1, 1.0);
        assert_eq!(scores.examples, 4);
    }

    #[test]
    fn test_disjoint_sequences_score_zero() {
        let scorer = FileScorer::new();
        let golds = to_tokens(&[1, 0, 1]);
        let predicts = to_tokens(&[0, 1, 0]);
        let scores = scorer.score_labels(&golds, &predicts).expect("valid labels");
        assert_eq!(scores.accuracy, 0.0);
        assert_eq!(scores.f1, 0.0);
    }

    #[test]
    fn test_half_agreement() {
        let scorer = FileScorer::new();
        let golds = to_tokens(&[1, 0]);
        let predicts = to_tokens(&[1, 1]);
        let scores = scorer.score_labels(&golds, &predicts).expect("valid labels");
        assert!((scores.accuracy - 0.5).abs() < 1e-12);
        assert!((scores.f1 - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(scores.per_class_f1.len(), 2);
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let scorer = FileScorer::new();
        let golds = to_tokens(&[1, 0, 1]);
        let predicts = to_tokens(&[1, 0]);
        match scorer.score_labels(&golds, &predicts) {
            Err(Error::LengthMismatch { golds: 3, predicts: 2 }) => {}
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_token_is_fatal() {
        let scorer = FileScorer::new();
        let golds = vec!["1".to_string(), "2".to_string()];
        let predicts = vec!["1".to_string(), "0".to_string()];
        assert!(matches!(
            scorer.score_labels(&golds, &predicts),
            Err(Error::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_accuracy_is_swap_symmetric() {
        let scorer = FileScorer::new();
        let a = to_tokens(&[1, 0, 0, 1, 1]);
        let b = to_tokens(&[1, 1, 0, 0, 1]);
        let ab = scorer.score_labels(&a, &b).expect("valid labels");
        let ba = scorer.score_labels(&b, &a).expect("valid labels");
        assert_eq!(ab.accuracy, ba.accuracy);
    }

    #[test]
    fn test_empty_sequences() {
        let scorer = FileScorer::new();
        let empty: Vec<String> = Vec::new();
        let scores = scorer.score_labels(&empty, &empty).expect("valid labels");
        assert_eq!(scores.accuracy, 0.0);
        assert_eq!(scores.f1, 0.0);
        assert_eq!(scores.examples, 0);
    }

    #[test]
    fn test_display_format() {
        let scores = Scores {
            accuracy: 0.5,
            f1: 0.25,
            per_class_f1: vec![0.0, 0.5],
            examples: 2,
        };
        assert_eq!(scores.to_string(), "acc: 0.5, f1: 0.25");
    }

    #[test]
    fn test_scores_serialize_to_json() {
        let scores = Scores {
            accuracy: 1.0,
            f1: 1.0,
            per_class_f1: vec![1.0, 1.0],
            examples: 3,
        };
        let json = serde_json::to_string(&scores).expect("serializable");
        assert!(json.contains("\"accuracy\":1.0"));
        assert!(json.contains("\"examples\":3"));
    }
}
