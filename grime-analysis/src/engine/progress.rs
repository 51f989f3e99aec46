//! Per-file progress reporting.

use std::time::Duration;

/// Snapshot handed to the progress callback after each analyzed file.
///
/// `current_file` is the 1-based position in the input list, so values skip
/// over files that failed to parse. For a fully clean run over N files the
/// callback sees exactly 1 through N in order.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub current_file: usize,
    pub total_files: usize,
    /// Relative path of the file just analyzed.
    pub file: String,
    /// Cumulative issues found so far in this run.
    pub issues_found: usize,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
    /// Running average time per analyzed file.
    pub average_time_per_file: Duration,
}

/// Invoked synchronously by the engine, once per successfully analyzed file.
pub type ProgressCallback = Box<dyn FnMut(&ProgressEvent) + Send>;
