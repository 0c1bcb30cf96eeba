//! Evaluar: Submission Scoring & Inference Harness
//!
//! Scores binary text-classification submissions (accuracy and macro-F1
//! over gold/prediction CSV files) and runs batched model inference down
//! to label strings.
//!
//! ## Architecture
//!
//! - `score`: submission-file reading and accuracy/macro-F1 scoring
//! - `metrics`: confusion matrix, per-class precision/recall/F1, averaging
//! - `infer`: batched inference over an injected frozen model
//! - `label`: the fixed label vocabulary and label-derivation policy
//!
//! ## Example
//!
//! ```
//! use evaluar::score::FileScorer;
//!
//! let scorer = FileScorer::new();
//! let golds = vec!["1".to_string(), "0".to_string()];
//! let predicts = vec!["1".to_string(), "1".to_string()];
//! let scores = scorer.score_labels(&golds, &predicts)?;
//! assert!((scores.accuracy - 0.5).abs() < 1e-12);
//! # Ok::<(), evaluar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod infer;
pub mod label;
pub mod metrics;
pub mod score;

pub use error::{Error, Result};
pub use infer::{Batch, ComputeDevice, InferenceRunner, ScoreModel};
pub use label::{LabelSet, TruthPolicy};
pub use metrics::{
    classification_report, confusion_matrix, Average, ConfusionMatrix, MultiClassMetrics,
};
pub use score::{read_labels, FileScorer, Scores};
