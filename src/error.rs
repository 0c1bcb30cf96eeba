//! Error types for the evaluation harness
//!
//! Every error is fatal: nothing is recovered locally, everything
//! propagates to the caller.

use thiserror::Error;

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scoring submissions or running inference
#[derive(Debug, Error)]
pub enum Error {
    /// Submission file missing or unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Gold and prediction label sequences differ in length
    #[error("Length mismatch: {golds} gold labels vs {predicts} predictions")]
    LengthMismatch { golds: usize, predicts: usize },

    /// A label token outside the configured label set
    #[error("Unknown label token: {token:?}")]
    UnknownLabel { token: String },

    /// Score matrix width does not match what the reduction expects
    #[error("Score matrix has {actual} columns, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Accumulated score rows do not divide evenly into decision groups
    #[error("{rows} score rows do not divide into groups of {group}")]
    RaggedGroups { rows: usize, group: usize },

    /// Label set construction rejected
    #[error("Invalid label set: {0}")]
    InvalidLabelSet(String),

    /// Model forward pass failed
    #[error("Model error: {0}")]
    Model(String),
}

impl Error {
    /// Check if the error came from the data rather than the model.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::LengthMismatch { .. }
                | Self::UnknownLabel { .. }
                | Self::RaggedGroups { .. }
        )
    }
}
