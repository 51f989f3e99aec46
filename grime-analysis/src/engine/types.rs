//! Terminal output of one analysis run.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use grime_core::types::{Issue, IssueKind, Severity};

/// Everything one run produced. Constructed once at the end of `analyze`
/// and immutable afterward.
///
/// The three groupings hold the same issue set partitioned along
/// independent dimensions; the bucket sizes of each dimension sum to
/// `total_issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Files offered to the run.
    pub total_files: usize,
    /// Files that parsed and went through the analyzers.
    pub analyzed_files: usize,
    pub total_issues: usize,
    pub issues_by_kind: BTreeMap<IssueKind, Vec<Issue>>,
    pub issues_by_category: BTreeMap<String, Vec<Issue>>,
    pub issues_by_severity: BTreeMap<Severity, Vec<Issue>>,
    /// Completion time, epoch milliseconds.
    pub timestamp_ms: u64,
    /// Wall-clock duration of the run.
    #[serde(with = "crate::engine::metrics::duration_millis")]
    pub duration: Duration,
}

impl AnalysisResult {
    /// All issues of the run, flattened out of the by-kind grouping.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues_by_kind.values().flatten()
    }
}
