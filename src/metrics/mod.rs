//! Classification metrics over a fixed label space
//!
//! Provides:
//! - Confusion matrix computation with the class count fixed up front
//! - Per-class precision, recall, F1
//! - Macro, micro, and weighted averaging
//! - sklearn-style classification reports
//!
//! Zero denominators yield 0.0 throughout, never NaN.

mod average;
mod confusion;
mod multiclass;
mod report;


pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use multiclass::MultiClassMetrics;
pub use report::{classification_report, confusion_matrix};
