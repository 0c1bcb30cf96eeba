//! Batched model inference
//!
//! Drives an injected frozen model over a batch source and reduces the
//! accumulated score matrices to label strings.

mod batch;
mod device;
mod model;
mod runner;

pub use batch::Batch;
pub use device::ComputeDevice;
pub use model::ScoreModel;
pub use runner::InferenceRunner;
