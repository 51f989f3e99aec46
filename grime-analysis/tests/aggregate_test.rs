//! Tests for issue aggregation and grouping.

use grime_analysis::{aggregate, group_by_severity};
use grime_core::types::{issue_id, now_ms, EffortLevel, Issue, IssueKind, Severity, SourceSpan};

fn issue(file: &str, kind: IssueKind, severity: Severity, category: &str, line: usize) -> Issue {
    let span = SourceSpan::lines(line, line);
    Issue {
        id: issue_id("test", file, kind, &span),
        kind,
        severity,
        category: category.to_string(),
        file: file.to_string(),
        span,
        description: String::new(),
        snippet: String::new(),
        recommendation: String::new(),
        effort: EffortLevel::Small,
        tags: Default::default(),
        detected_by: "test".to_string(),
        detected_at_ms: now_ms(),
        related_issues: Vec::new(),
    }
}

fn sample() -> Vec<Issue> {
    vec![
        issue("a.ts", IssueKind::ConfusingLogic, Severity::Medium, "general", 1),
        issue("a.ts", IssueKind::PoorNaming, Severity::Low, "general", 2),
        issue("b.ts", IssueKind::ConfusingLogic, Severity::High, "general", 3),
        issue("b.ts", IssueKind::LegacyCode, Severity::Low, "cleanup", 4),
        issue("c.ts", IssueKind::TypeSafety, Severity::Critical, "types", 5),
    ]
}

/// Every issue lands in exactly one bucket per dimension.
#[test]
fn test_each_dimension_partitions_the_input() {
    let issues = sample();
    let collection = aggregate(&issues);

    assert_eq!(collection.issues.len(), issues.len());
    let by_file: usize = collection.by_file.values().map(Vec::len).sum();
    let by_kind: usize = collection.by_kind.values().map(Vec::len).sum();
    let by_category: usize = collection.by_category.values().map(Vec::len).sum();
    assert_eq!(by_file, issues.len());
    assert_eq!(by_kind, issues.len());
    assert_eq!(by_category, issues.len());
}

#[test]
fn test_buckets_contain_only_matching_issues() {
    let collection = aggregate(&sample());

    let for_a = &collection.by_file["a.ts"];
    assert_eq!(for_a.len(), 2);
    assert!(for_a.iter().all(|issue| issue.file == "a.ts"));

    assert_eq!(collection.by_kind[&IssueKind::ConfusingLogic].len(), 2);
    assert_eq!(collection.by_category["general"].len(), 3);
    assert_eq!(collection.by_category["cleanup"].len(), 1);
}

#[test]
fn test_empty_input_aggregates_to_empty() {
    let collection = aggregate(&[]);
    assert!(collection.issues.is_empty());
    assert!(collection.by_file.is_empty());
    assert!(collection.by_kind.is_empty());
    assert!(collection.by_category.is_empty());
}

/// Severity grouping partitions the input and iterates most severe first.
#[test]
fn test_group_by_severity_partitions() {
    let issues = sample();
    let grouped = group_by_severity(&issues);

    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, issues.len());
    assert_eq!(grouped[&Severity::Critical].len(), 1);
    assert_eq!(grouped[&Severity::Low].len(), 2);
    assert_eq!(grouped.keys().next(), Some(&Severity::Critical));
}

/// Aggregation is pure: a filtered subset re-aggregates independently.
#[test]
fn test_reaggregating_filtered_subset() {
    let issues = sample();
    let low_only: Vec<Issue> = issues
        .into_iter()
        .filter(|issue| issue.severity == Severity::Low)
        .collect();

    let collection = aggregate(&low_only);
    assert_eq!(collection.issues.len(), 2);
    assert_eq!(collection.by_file["a.ts"].len(), 1);
    assert_eq!(collection.by_file["b.ts"].len(), 1);
}
