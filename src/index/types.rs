//! Core types for the usage index.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// Occurrence counts keyed by file path (as given) or function name, in
/// first-seen order.
pub type Occurrences<K> = IndexMap<K, usize>;

/// A function called from exactly one file, with its count in that file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExclusiveUsage {
    pub function: String,
    pub count: usize,
}

/// The exclusivity report for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// The path as given on input.
    pub file: PathBuf,
    /// Functions only this file calls, in first-encountered order.
    pub exclusive: Vec<ExclusiveUsage>,
}
