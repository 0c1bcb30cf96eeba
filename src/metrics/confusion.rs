//! Confusion matrix over a fixed class space

use std::fmt;

/// Confusion matrix for a closed set of classes.
///
/// Element `[i][j]` counts samples with true class `i` predicted as `j`.
/// The class count comes from the label set rather than being inferred
/// from the data, so metrics stay stable when a class never occurs in a
/// particular file pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// matrix[true_class][predicted_class] = count
    matrix: Vec<Vec<usize>>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Empty matrix over `n_classes` classes.
    #[must_use]
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
        }
    }

    /// Build from parallel class-index sequences.
    ///
    /// Panics if the sequences differ in length. Out-of-range indices are
    /// not counted; callers that map tokens through a `LabelSet` never
    /// produce them.
    #[must_use]
    pub fn from_indices(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Self {
        assert_eq!(
            y_pred.len(),
            y_true.len(),
            "predictions and targets must have same length"
        );

        let mut cm = Self::new(n_classes);
        for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
            cm.record(truth, pred);
        }
        cm
    }

    /// Count one observation.
    pub fn record(&mut self, true_class: usize, predicted_class: usize) {
        if true_class < self.n_classes && predicted_class < self.n_classes {
            self.matrix[true_class][predicted_class] += 1;
        }
    }

    /// Number of classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count at `[true_class][predicted_class]`.
    #[must_use]
    pub fn get(&self, true_class: usize, predicted_class: usize) -> usize {
        self.matrix[true_class][predicted_class]
    }

    /// Samples of `class` predicted as `class`.
    #[must_use]
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Samples predicted as `class` that were another class.
    #[must_use]
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// Samples of `class` predicted as another class.
    #[must_use]
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// Number of true instances of `class`.
    #[must_use]
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Total number of counted samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Fraction of samples on the diagonal; 0.0 when empty.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion matrix (rows = gold, columns = predicted):")?;

        write!(f, "      ")?;
        for j in 0..self.n_classes {
            write!(f, "pred {j} ")?;
        }
        writeln!(f)?;

        for i in 0..self.n_classes {
            write!(f, "gold {i}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
