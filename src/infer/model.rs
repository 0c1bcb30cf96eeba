//! Model collaborator contract

use crate::error::Result;
use crate::infer::batch::Batch;
use crate::infer::device::ComputeDevice;
use ndarray::Array2;

/// Frozen model driven by the inference runner.
///
/// An implementation receives one batch and the target device and returns
/// a `[rows, classes]` score matrix for it. The runner never trains, so
/// no gradient state is involved; moving the batch tensors onto `device`
/// is the implementation's concern.
///
/// Closures with the matching signature implement this trait, so a
/// deterministic stand-in is one line in a test.
pub trait ScoreModel {
    /// Score one batch.
    fn forward(&self, batch: &Batch, device: ComputeDevice) -> Result<Array2<f32>>;
}

impl<F> ScoreModel for F
where
    F: Fn(&Batch, ComputeDevice) -> Result<Array2<f32>>,
{
    fn forward(&self, batch: &Batch, device: ComputeDevice) -> Result<Array2<f32>> {
        self(batch, device)
    }
}
