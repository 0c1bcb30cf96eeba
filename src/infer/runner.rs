//! Inference runner: batches in, label strings out
//!
//! Batches are consumed strictly in source order and the answer list
//! matches that order. A failure on any batch aborts the whole run; no
//! partial answer list is ever returned.

use crate::error::{Error, Result};
use crate::infer::batch::Batch;
use crate::infer::device::ComputeDevice;
use crate::infer::model::ScoreModel;
use crate::label::LabelSet;
use ndarray::Array2;

/// Runs a frozen model over a batch source and reduces score matrices to
/// labels from a fixed set.
#[derive(Debug, Clone)]
pub struct InferenceRunner {
    labels: LabelSet,
    device: ComputeDevice,
}

impl InferenceRunner {
    /// Runner over `labels` on an explicit device.
    #[must_use]
    pub fn new(labels: LabelSet, device: ComputeDevice) -> Self {
        Self { labels, device }
    }

    /// Runner over the binary label set on the auto-detected device.
    #[must_use]
    pub fn binary() -> Self {
        Self::new(LabelSet::binary(), ComputeDevice::default())
    }

    /// The label set argmax indices map through.
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// The device handed to the model on every forward pass.
    #[must_use]
    pub fn device(&self) -> ComputeDevice {
        self.device
    }

    /// Full-argmax reduction: one label per scored row.
    ///
    /// Every batch is scored in source order; each row's label is the
    /// first index of its maximum score, mapped through the label set.
    /// The score matrix must be `labels.len()` columns wide.
    pub fn predict_argmax<M, I>(&self, model: &M, batches: I) -> Result<Vec<String>>
    where
        M: ScoreModel + ?Sized,
        I: IntoIterator<Item = Result<Batch>>,
    {
        let mut answers = Vec::new();
        for batch in batches {
            let logits = self.forward_checked(model, &batch?, self.labels.len())?;
            for row in logits.rows() {
                let class = argmax(row.iter().copied());
                let token = self
                    .labels
                    .token(class)
                    .expect("argmax index bounded by checked matrix width");
                answers.push(token.to_string());
            }
        }
        Ok(answers)
    }

    /// Grouped positive-class reduction for pre-expanded candidate rows.
    ///
    /// Input batches are assumed pre-expanded so that every group of
    /// `labels.len()` consecutive scored rows is one decision (one row per
    /// candidate-label pairing). Only the positive-class column (index 1)
    /// of each two-column score matrix is kept; the predicted label for a
    /// group is the in-group index of its maximum positive score, mapped
    /// through the label set.
    ///
    /// # Errors
    ///
    /// Besides source and model errors, returns `Error::ShapeMismatch` if
    /// a score matrix is not exactly two columns wide and
    /// `Error::RaggedGroups` if the accumulated row count is not a
    /// multiple of the group size.
    pub fn predict_grouped<M, I>(&self, model: &M, batches: I) -> Result<Vec<String>>
    where
        M: ScoreModel + ?Sized,
        I: IntoIterator<Item = Result<Batch>>,
    {
        let group = self.labels.len();

        let mut positives: Vec<f32> = Vec::new();
        for batch in batches {
            let logits = self.forward_checked(model, &batch?, 2)?;
            positives.extend(logits.column(1).iter().copied());
        }

        if positives.len() % group != 0 {
            return Err(Error::RaggedGroups {
                rows: positives.len(),
                group,
            });
        }

        let mut answers = Vec::with_capacity(positives.len() / group);
        for chunk in positives.chunks(group) {
            let class = argmax(chunk.iter().copied());
            let token = self
                .labels
                .token(class)
                .expect("chunk length equals label-set size");
            answers.push(token.to_string());
        }
        Ok(answers)
    }

    fn forward_checked<M>(&self, model: &M, batch: &Batch, want_cols: usize) -> Result<Array2<f32>>
    where
        M: ScoreModel + ?Sized,
    {
        let logits = model.forward(batch, self.device)?;
        if logits.ncols() != want_cols {
            return Err(Error::ShapeMismatch {
                expected: want_cols,
                actual: logits.ncols(),
            });
        }
        Ok(logits)
    }
}

/// First index of the maximum value; ties keep the earliest.
fn argmax(values: impl IntoIterator<Item = f32>) -> usize {
    let mut best = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, value) in values.into_iter().enumerate() {
        if value > best_value {
            best = i;
            best_value = value;
        }
    }
    best
}
