//! Tests for the code quality analyzer's four detections.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use grime_analysis::{CodeQualityAnalyzer, ParserManager, PatternAnalyzer};
use grime_core::types::{FileCategory, FileInfo, Issue, IssueKind, Severity};

/// Parses `source` under `file_name` and runs the analyzer over the tree.
fn analyze_source(source: &str, file_name: &str) -> Vec<Issue> {
    let mut parser = ParserManager::with_warning_logs(false);
    let tree = parser.parse_source(source, Path::new(file_name)).unwrap();
    let analyzer = CodeQualityAnalyzer::new().unwrap();
    let file = FileInfo {
        path: PathBuf::from(file_name),
        relative_path: file_name.to_string(),
        extension: Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string(),
        size: source.len() as u64,
        last_modified: SystemTime::now(),
        category: FileCategory::Service,
    };
    analyzer.analyze(&file, &tree).unwrap()
}

#[test]
fn test_deep_nesting_flagged_once_at_outermost() {
    let issues = analyze_source(
        r#"
function gatekeeper(user) {
  if (user.active) {
    if (user.verified) {
      if (user.admin) {
        if (user.owner) {
          if (user.founder) {
            return true;
          }
        }
      }
    }
  }
  return false;
}
"#,
        "gate.ts",
    );

    assert_eq!(issues.len(), 1, "one issue for the whole chain");
    assert_eq!(issues[0].kind, IssueKind::ConfusingLogic);
    assert_eq!(issues[0].severity, Severity::Medium);
    assert!(issues[0].description.contains("5 levels deep"));
    assert!(issues[0].tags.iter().any(|t| t == "nested-conditionals"));
}

#[test]
fn test_three_level_nesting_not_flagged() {
    let issues = analyze_source(
        r#"
function boundary(user) {
  if (user.active) {
    if (user.verified) {
      if (user.admin) {
        return true;
      }
    }
  }
  return false;
}
"#,
        "boundary.ts",
    );

    assert!(issues.is_empty());
}

#[test]
fn test_complex_boolean_flagged() {
    let issues = analyze_source(
        r#"
function isEligible(record) {
  return record.active && record.verified && record.paid && record.confirmed && record.fresh;
}
"#,
        "eligible.ts",
    );

    assert_eq!(issues.len(), 1, "only the outermost expression is reported");
    assert_eq!(issues[0].kind, IssueKind::ConfusingLogic);
    assert!(issues[0].description.contains("4 operators"));
    assert!(issues[0].tags.iter().any(|t| t == "complex-boolean"));
}

#[test]
fn test_negations_count_toward_operator_total() {
    let issues = analyze_source(
        r#"
function isBlocked(record) {
  return !record.active && !record.verified && !record.paid;
}
"#,
        "blocked.ts",
    );

    assert_eq!(issues.len(), 1);
    assert!(issues[0].description.contains("5 operators"));
}

#[test]
fn test_boolean_at_threshold_not_flagged() {
    let issues = analyze_source(
        r#"
function isActive(record) {
  return record.active && record.verified && record.paid || record.legacy;
}
"#,
        "active.ts",
    );

    assert!(issues.is_empty(), "three operators are within the limit");
}

#[test]
fn test_single_letter_variable_flagged() {
    let issues = analyze_source(
        r#"
function compute() {
  const x = 10;
  return x * 2;
}
"#,
        "compute.ts",
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::PoorNaming);
    assert_eq!(issues[0].severity, Severity::Low);
    assert!(issues[0].description.contains("'x'"));
    assert!(issues[0].tags.iter().any(|t| t == "single-letter"));
}

#[test]
fn test_loop_counters_exempt() {
    let issues = analyze_source(
        r#"
function total(values) {
  let sum = 0;
  for (let i = 0; i < values.length; i++) {
    sum += values[i];
  }
  for (const entry of values) {
    const j = entry.weight;
    sum += j;
  }
  return sum;
}
"#,
        "total.ts",
    );

    assert!(issues.is_empty(), "i and j inside loops are conventional");
}

#[test]
fn test_unconventional_loop_counter_flagged() {
    let issues = analyze_source(
        r#"
function spin(logger) {
  for (let n = 0; n < 3; n++) {
    logger.tick(n);
  }
}
"#,
        "spin.ts",
    );

    assert_eq!(issues.len(), 1, "only i, j, k are exempt");
    assert!(issues[0].description.contains("'n'"));
}

#[test]
fn test_single_letter_parameter_flagged() {
    let issues = analyze_source(
        r#"
function handle(e) {
  return e.message;
}
"#,
        "handle.ts",
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::PoorNaming);
    assert!(issues[0].description.contains("'e'"));
    assert!(issues[0].tags.iter().any(|t| t == "parameters"));
}

#[test]
fn test_short_arrow_parameters_exempt() {
    let issues = analyze_source("const doubled = values.map(x => x * 2);\n", "map.ts");
    assert!(issues.is_empty(), "terse arrow callbacks keep single letters");
}

#[test]
fn test_long_arrow_parameters_flagged() {
    let issues = analyze_source(
        "const labels = records.map(r => ({ identifier: r.primaryKey, label: r.displayLabel, active: r.status === 'active' }));\n",
        "labels.ts",
    );

    assert_eq!(issues.len(), 1);
    assert!(issues[0].description.contains("'r'"));
}

#[test]
fn test_commented_code_block_flagged() {
    let issues = analyze_source(
        r#"
function active() {
  return true;
}

// const legacy = loadLegacy();
// legacy.initialize();
// return legacy.flags;
"#,
        "legacy.ts",
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::LegacyCode);
    assert!(issues[0].description.contains("3 lines"));
    assert_eq!(issues[0].snippet, "Lines 6-8");
    assert_eq!(issues[0].span.start_line, 6);
    assert_eq!(issues[0].span.end_line, 8);
    assert!(issues[0].tags.iter().any(|t| t == "commented-code"));
}

#[test]
fn test_block_comment_markers_recognized() {
    let issues = analyze_source(
        r#"
/* const legacy = loadLegacy();
 * legacy.initialize();
 * return legacy.flags; */
"#,
        "block.ts",
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::LegacyCode);
}

#[test]
fn test_prose_comments_not_flagged() {
    let issues = analyze_source(
        r#"
// This module resolves the active tenant for a request
// The lookup order is subdomain, then header, then session
// Results are cached for five minutes
function resolveTenant() {
  return null;
}
"#,
        "tenant.ts",
    );

    assert!(issues.is_empty(), "prose comments are not code");
}

#[test]
fn test_short_commented_run_not_flagged() {
    let issues = analyze_source(
        r#"
// const first = 1;
// const second = 2;
const live = 3;
"#,
        "short.ts",
    );

    assert!(issues.is_empty(), "two commented lines are below the threshold");
}

#[test]
fn test_issue_ids_stable_across_runs() {
    let source = r#"
function compute() {
  const x = 10;
  return x * 2;
}
"#;
    let first: Vec<String> = analyze_source(source, "stable.ts")
        .into_iter()
        .map(|issue| issue.id)
        .collect();
    let second: Vec<String> = analyze_source(source, "stable.ts")
        .into_iter()
        .map(|issue| issue.id)
        .collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_javascript_sources_supported() {
    let issues = analyze_source(
        r#"
function handle(e) {
  return e.message;
}
"#,
        "handle.js",
    );

    assert_eq!(issues.len(), 1);
    assert!(issues[0].description.contains("'e'"));
}

#[test]
fn test_analyzer_metadata() {
    let analyzer = CodeQualityAnalyzer::new().unwrap();
    assert_eq!(analyzer.name(), "code-quality");

    let supported = analyzer.supported_categories();
    assert!(supported.contains(&FileCategory::Service));
    assert!(supported.contains(&FileCategory::Component));
    assert!(supported.contains(&FileCategory::Other));
    assert!(!supported.contains(&FileCategory::Type));
    assert!(!supported.contains(&FileCategory::Config));
}

#[test]
fn test_clean_file_produces_no_issues() {
    let issues = analyze_source(
        r#"
export function formatGreeting(name) {
  return `Hello, ${name}`;
}
"#,
        "clean.ts",
    );

    assert!(issues.is_empty());
}
