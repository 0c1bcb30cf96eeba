//! Submission file reading
//!
//! A submission is UTF-8 text, comma-separated, with one header line and
//! one record per line. Only the last comma-delimited field is read; it
//! carries the decision for that row.

use crate::error::Result;
use crate::label::TruthPolicy;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read derived labels from the last column of a submission file.
///
/// The first line is a header and is discarded. Every following line is
/// trimmed, split on commas, and its last field fed through `policy`. A
/// row with no comma still has one field: the whole trimmed line.
///
/// # Errors
///
/// Returns `Error::Io` if the file is missing, unreadable, or not UTF-8.
pub fn read_labels(path: impl AsRef<Path>, policy: &TruthPolicy) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    // header
    let _header = lines.next().transpose()?;

    let mut labels = Vec::new();
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        let field = trimmed.rsplit(',').next().unwrap_or(trimmed);
        labels.push(policy.derive(field).to_string());
    }
    Ok(labels)
}
