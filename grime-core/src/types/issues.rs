//! The issue taxonomy: everything an analyzer can report.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use xxhash_rust::xxh3::xxh3_64;

/// Closed taxonomy of detectable problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    BackwardCompatibility,
    LegacyCode,
    UnnecessaryAdapter,
    ConfusingLogic,
    CodeDuplication,
    InconsistentPattern,
    PoorNaming,
    MissingErrorHandling,
    TypeSafety,
    Architectural,
}

impl IssueKind {
    /// Returns the kebab-case name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            IssueKind::BackwardCompatibility => "backward-compatibility",
            IssueKind::LegacyCode => "legacy-code",
            IssueKind::UnnecessaryAdapter => "unnecessary-adapter",
            IssueKind::ConfusingLogic => "confusing-logic",
            IssueKind::CodeDuplication => "code-duplication",
            IssueKind::InconsistentPattern => "inconsistent-pattern",
            IssueKind::PoorNaming => "poor-naming",
            IssueKind::MissingErrorHandling => "missing-error-handling",
            IssueKind::TypeSafety => "type-safety",
            IssueKind::Architectural => "architectural",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Issue severity, ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rough cost of acting on an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffortLevel {
    Trivial,
    Small,
    Medium,
    Large,
}

/// Source location of an issue. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl SourceSpan {
    /// Span covering whole lines, with zeroed columns.
    pub fn lines(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            start_column: 0,
            end_column: 0,
        }
    }
}

impl std::fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}:{}", self.start_line, self.start_column, self.end_line, self.end_column)
    }
}

/// One detected problem, produced by exactly one analyzer invocation.
///
/// Invariant: `file` always equals the `relative_path` of a [`super::FileInfo`]
/// passed into the same run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Deterministic fingerprint of (detector, file, kind, span). Stable
    /// across runs for unchanged input.
    pub id: String,
    pub kind: IssueKind,
    pub severity: Severity,
    /// Free-form grouping tag, distinct from the file category.
    pub category: String,
    /// Relative path of the file the issue was found in.
    pub file: String,
    pub span: SourceSpan,
    pub description: String,
    /// Source excerpt at the span, truncated to 200 characters.
    pub snippet: String,
    pub recommendation: String,
    pub effort: EffortLevel,
    pub tags: SmallVec<[String; 4]>,
    /// Name of the analyzer that produced the issue.
    pub detected_by: String,
    /// Detection time, epoch milliseconds.
    pub detected_at_ms: u64,
    /// Ids of related issues, when an analyzer links findings.
    #[serde(default)]
    pub related_issues: Vec<String>,
}

/// Compute the deterministic id for an issue.
///
/// xxh3 over the identifying fields, rendered as 16 hex digits. Two issues
/// from the same analyzer at the same location with the same kind share an
/// id: they are the same finding.
pub fn issue_id(detected_by: &str, file: &str, kind: IssueKind, span: &SourceSpan) -> String {
    let key = format!(
        "{}\u{0}{}\u{0}{}\u{0}{}:{}:{}:{}",
        detected_by, file, kind, span.start_line, span.start_column, span.end_line, span.end_column
    );
    format!("{:016x}", xxh3_64(key.as_bytes()))
}

/// Current time as epoch milliseconds. Returns 0 if the clock is before the
/// epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
