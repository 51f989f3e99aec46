//! Issue aggregation: pure grouping functions over flat issue lists.
//!
//! Stateless and independent of any live run. Callers may re-aggregate
//! arbitrary subsets, for example after filtering by severity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use grime_core::types::{Issue, IssueKind, Severity};

/// A flat issue list and its partitions along three dimensions.
///
/// Every issue lands in exactly one bucket per dimension, so for each
/// grouping the bucket sizes sum to `issues.len()`. `BTreeMap` keeps bucket
/// order deterministic across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCollection {
    pub issues: Vec<Issue>,
    pub by_file: BTreeMap<String, Vec<Issue>>,
    pub by_kind: BTreeMap<IssueKind, Vec<Issue>>,
    pub by_category: BTreeMap<String, Vec<Issue>>,
}

/// Partition a flat issue list by file, kind, and category.
pub fn aggregate(issues: &[Issue]) -> IssueCollection {
    let mut by_file: BTreeMap<String, Vec<Issue>> = BTreeMap::new();
    let mut by_kind: BTreeMap<IssueKind, Vec<Issue>> = BTreeMap::new();
    let mut by_category: BTreeMap<String, Vec<Issue>> = BTreeMap::new();

    for issue in issues {
        by_file
            .entry(issue.file.clone())
            .or_default()
            .push(issue.clone());
        by_kind.entry(issue.kind).or_default().push(issue.clone());
        by_category
            .entry(issue.category.clone())
            .or_default()
            .push(issue.clone());
    }

    IssueCollection {
        issues: issues.to_vec(),
        by_file,
        by_kind,
        by_category,
    }
}

/// Partition a flat issue list by severity.
pub fn group_by_severity(issues: &[Issue]) -> BTreeMap<Severity, Vec<Issue>> {
    let mut grouped: BTreeMap<Severity, Vec<Issue>> = BTreeMap::new();
    for issue in issues {
        grouped
            .entry(issue.severity)
            .or_default()
            .push(issue.clone());
    }
    grouped
}
